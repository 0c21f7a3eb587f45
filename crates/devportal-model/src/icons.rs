//! Closed sets of image/icon keys used by cards.
//!
//! Card data refers to images by string key. Parsing the key into one of
//! these enums happens once, where the data is loaded; everything past that
//! point matches exhaustively and cannot meet an unknown icon.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Artwork for the "Start building" page cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PageCardImage {
    EcosystemTools,
    CadenceVscode,
    CadencePlayground,
    EmeraldSnippets,
    EmeraldExamples,
    CadenceCookbook,
    CreateFungibleTokens,
    LaunchAnNft,
    QuickstartImpl,
}

impl PageCardImage {
    pub const ALL: [PageCardImage; 9] = [
        PageCardImage::EcosystemTools,
        PageCardImage::CadenceVscode,
        PageCardImage::CadencePlayground,
        PageCardImage::EmeraldSnippets,
        PageCardImage::EmeraldExamples,
        PageCardImage::CadenceCookbook,
        PageCardImage::CreateFungibleTokens,
        PageCardImage::LaunchAnNft,
        PageCardImage::QuickstartImpl,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            PageCardImage::EcosystemTools => "ecosystem-tools",
            PageCardImage::CadenceVscode => "cadence-vscode",
            PageCardImage::CadencePlayground => "cadence-playground",
            PageCardImage::EmeraldSnippets => "emerald-snippets",
            PageCardImage::EmeraldExamples => "emerald-examples",
            PageCardImage::CadenceCookbook => "cadence-cookbook",
            PageCardImage::CreateFungibleTokens => "create-fungible-tokens",
            PageCardImage::LaunchAnNft => "launch-an-nft",
            PageCardImage::QuickstartImpl => "quickstart-impl",
        }
    }

    pub const fn alt_text(&self) -> &'static str {
        match self {
            PageCardImage::EcosystemTools => "Ecosystem & Tools",
            PageCardImage::CadenceVscode => "Cadence",
            PageCardImage::CadencePlayground => "Cadence Playground",
            PageCardImage::EmeraldSnippets => "Emerald Snippets",
            PageCardImage::EmeraldExamples => "Emerald Examples",
            PageCardImage::CadenceCookbook => "Cadence Cookbook",
            PageCardImage::CreateFungibleTokens => "Create Fungible Tokens",
            PageCardImage::LaunchAnNft => "Launch an NFT",
            PageCardImage::QuickstartImpl => "Quick Starts",
        }
    }

    /// Site-relative path of the image asset.
    pub fn asset_path(&self) -> String {
        format!("/images/misc/{}.png", self.as_str())
    }
}

impl fmt::Display for PageCardImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageCardImage {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageCardImage::ALL
            .into_iter()
            .find(|image| image.as_str() == s)
            .ok_or_else(|| ModelError::UnknownIcon(s.to_string()))
    }
}

impl TryFrom<String> for PageCardImage {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PageCardImage> for &'static str {
    fn from(image: PageCardImage) -> Self {
        image.as_str()
    }
}

/// Community platform icons on the social cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum SocialIcon {
    Discord,
    XDotCom,
    Github,
}

impl SocialIcon {
    pub const ALL: [SocialIcon; 3] = [SocialIcon::Discord, SocialIcon::XDotCom, SocialIcon::Github];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SocialIcon::Discord => "discord",
            SocialIcon::XDotCom => "x.com",
            SocialIcon::Github => "github",
        }
    }

    pub const fn alt_text(&self) -> &'static str {
        match self {
            SocialIcon::Discord => "Discord",
            SocialIcon::XDotCom => "X.com",
            SocialIcon::Github => "GitHub",
        }
    }

    pub fn asset_path(&self) -> String {
        format!("/images/misc/{}-image.png", self.as_str())
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialIcon {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SocialIcon::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| ModelError::UnknownIcon(s.to_string()))
    }
}

impl TryFrom<String> for SocialIcon {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SocialIcon> for &'static str {
    fn from(icon: SocialIcon) -> Self {
        icon.as_str()
    }
}

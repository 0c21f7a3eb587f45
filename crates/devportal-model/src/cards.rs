//! Static card catalog for the "Start building" section.

use serde::Serialize;

use crate::icons::PageCardImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: PageCardImage,
    pub hover_text: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageCategory {
    pub name: &'static str,
    pub cards: &'static [PageCard],
}

const GET_STARTED: &str = "Get Started";

const GUIDES: &[PageCard] = &[
    PageCard {
        title: "Create Fungible Tokens",
        subtitle: "Deploy fungible tokens for your project",
        image: PageCardImage::CreateFungibleTokens,
        hover_text: GET_STARTED,
        link: "/build/cadence/core-contracts/fungible-token",
    },
    PageCard {
        title: "Launch an NFT",
        subtitle: "Deploy your first NFT collection",
        image: PageCardImage::LaunchAnNft,
        hover_text: GET_STARTED,
        link: "/build/cadence/guides/nft",
    },
    PageCard {
        title: "Quickstarts",
        subtitle: "Some codes for quick implementation",
        image: PageCardImage::QuickstartImpl,
        hover_text: GET_STARTED,
        link: "https://academy.ecdao.org/en/quickstarts",
    },
];

const CODE_SNIPPETS: &[PageCard] = &[
    PageCard {
        title: "Emerald Snippets",
        subtitle: "Examples of how to code things in Cadence and Flow.",
        image: PageCardImage::EmeraldSnippets,
        hover_text: GET_STARTED,
        link: "https://academy.ecdao.org/en/snippets",
    },
    PageCard {
        title: "Emerald Examples",
        subtitle: "Basic Cadence code examples",
        image: PageCardImage::EmeraldExamples,
        hover_text: GET_STARTED,
        link: "https://academy.ecdao.org/en/cadence-by-example",
    },
    PageCard {
        title: "Cookbook",
        subtitle: "Explore Cadence smart contracts and transaction scripts for different use cases",
        image: PageCardImage::CadenceCookbook,
        hover_text: GET_STARTED,
        link: "https://cookbook.flow.com/",
    },
];

const RESOURCES: &[PageCard] = &[
    PageCard {
        title: "Ecosystem",
        subtitle: "Explore an array of exciting, grassroots initiatives, and projects",
        image: PageCardImage::EcosystemTools,
        hover_text: GET_STARTED,
        link: "/ecosystem",
    },
    PageCard {
        title: "Cadence",
        subtitle: "Forge the future of decentralized apps.",
        image: PageCardImage::CadenceVscode,
        hover_text: GET_STARTED,
        link: "https://cadence-lang.org/",
    },
    PageCard {
        title: "Playground",
        subtitle: "A smart contract tutorial for Cadence.",
        image: PageCardImage::CadencePlayground,
        hover_text: GET_STARTED,
        link: "https://play.flow.com/",
    },
];

/// Card categories in display order.
pub fn start_building_categories() -> [PageCategory; 3] {
    [
        PageCategory {
            name: "Guides",
            cards: GUIDES,
        },
        PageCategory {
            name: "Code Snippets",
            cards: CODE_SNIPPETS,
        },
        PageCategory {
            name: "Resources",
            cards: RESOURCES,
        },
    ]
}

//! Built-in chain metadata
//!
//! Common EVM networks, keyed by chain ID. Local development IDs (1337, 31337)
//! are deliberately absent so that a node run with `anvil` or `hardhat`
//! reports as an unknown chain.

use super::{ChainMetadata, NativeCurrency};

fn ether() -> NativeCurrency {
    NativeCurrency::new("Ether", "ETH", 18)
}

fn chain(
    chain_id: u64,
    name: &str,
    slug: &str,
    testnet: bool,
    info_url: Option<&str>,
    native_currency: NativeCurrency,
) -> ChainMetadata {
    ChainMetadata {
        chain_id,
        name: name.to_string(),
        slug: slug.to_string(),
        testnet,
        info_url: info_url.map(str::to_string),
        native_currency,
    }
}

/// All built-in chains
pub fn builtin_chains() -> Vec<ChainMetadata> {
    let mut chains = mainnets();
    chains.extend(testnets());
    chains
}

fn mainnets() -> Vec<ChainMetadata> {
    vec![
        chain(
            1,
            "Ethereum",
            "ethereum",
            false,
            Some("https://ethereum.org"),
            ether(),
        ),
        chain(
            10,
            "OP Mainnet",
            "optimism",
            false,
            Some("https://optimism.io"),
            ether(),
        ),
        chain(
            56,
            "BNB Smart Chain Mainnet",
            "binance",
            false,
            Some("https://www.bnbchain.org"),
            NativeCurrency::new("BNB Chain Native Token", "BNB", 18),
        ),
        chain(
            100,
            "Gnosis",
            "gnosis",
            false,
            Some("https://docs.gnosischain.com"),
            NativeCurrency::new("xDAI", "XDAI", 18),
        ),
        chain(
            137,
            "Polygon Mainnet",
            "polygon",
            false,
            Some("https://polygon.technology"),
            NativeCurrency::new("MATIC", "MATIC", 18),
        ),
        chain(
            250,
            "Fantom Opera",
            "fantom",
            false,
            Some("https://fantom.foundation"),
            NativeCurrency::new("Fantom", "FTM", 18),
        ),
        chain(
            324,
            "zkSync Mainnet",
            "zksync",
            false,
            Some("https://zksync.io"),
            ether(),
        ),
        chain(
            1101,
            "Polygon zkEVM",
            "polygon-zkevm",
            false,
            Some("https://polygon.technology/polygon-zkevm"),
            ether(),
        ),
        chain(
            5000,
            "Mantle",
            "mantle",
            false,
            Some("https://mantle.xyz"),
            NativeCurrency::new("Mantle", "MNT", 18),
        ),
        chain(
            8453,
            "Base",
            "base",
            false,
            Some("https://base.org"),
            ether(),
        ),
        chain(
            42161,
            "Arbitrum One",
            "arbitrum",
            false,
            Some("https://arbitrum.io"),
            ether(),
        ),
        chain(
            42170,
            "Arbitrum Nova",
            "arbitrum-nova",
            false,
            Some("https://arbitrum.io"),
            ether(),
        ),
        chain(
            42220,
            "Celo Mainnet",
            "celo",
            false,
            Some("https://celo.org"),
            NativeCurrency::new("CELO", "CELO", 18),
        ),
        chain(
            43114,
            "Avalanche C-Chain",
            "avalanche",
            false,
            Some("https://www.avax.network"),
            NativeCurrency::new("Avalanche", "AVAX", 18),
        ),
        chain(
            59144,
            "Linea",
            "linea",
            false,
            Some("https://linea.build"),
            ether(),
        ),
        chain(
            534352,
            "Scroll",
            "scroll",
            false,
            Some("https://scroll.io"),
            ether(),
        ),
    ]
}

fn testnets() -> Vec<ChainMetadata> {
    vec![
        chain(
            97,
            "BNB Smart Chain Testnet",
            "binance-testnet",
            true,
            Some("https://www.bnbchain.org"),
            NativeCurrency::new("BNB Chain Native Token", "tBNB", 18),
        ),
        chain(
            17000,
            "Holesky",
            "holesky",
            true,
            Some("https://holesky.ethpandaops.io"),
            NativeCurrency::new("Testnet ETH", "ETH", 18),
        ),
        chain(
            43113,
            "Avalanche Fuji Testnet",
            "avalanche-fuji",
            true,
            Some("https://cchain.explorer.avax-test.network"),
            NativeCurrency::new("Avalanche", "AVAX", 18),
        ),
        chain(
            80002,
            "Polygon Amoy Testnet",
            "polygon-amoy-testnet",
            true,
            Some("https://polygon.technology"),
            NativeCurrency::new("MATIC", "MATIC", 18),
        ),
        chain(
            84532,
            "Base Sepolia Testnet",
            "base-sepolia-testnet",
            true,
            Some("https://base.org"),
            NativeCurrency::new("Sepolia Ether", "ETH", 18),
        ),
        chain(
            421614,
            "Arbitrum Sepolia",
            "arbitrum-sepolia",
            true,
            Some("https://arbitrum.io"),
            NativeCurrency::new("Sepolia Ether", "ETH", 18),
        ),
        chain(
            11155111,
            "Sepolia",
            "sepolia",
            true,
            Some("https://sepolia.otterscan.io"),
            NativeCurrency::new("Sepolia Ether", "ETH", 18),
        ),
        chain(
            11155420,
            "OP Sepolia Testnet",
            "op-sepolia-testnet",
            true,
            Some("https://optimism.io"),
            NativeCurrency::new("Sepolia Ether", "ETH", 18),
        ),
    ]
}

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const EXTENSIONS: [&str; 4] = [".jpg", ".png", ".svg", ".webp"];

/// A resolved logo ready for embedding. SVG files keep their markup so the
/// renderer can re-encode them; raster files become data URIs directly.
#[derive(Debug, Clone)]
pub enum LogoData {
    Svg(String),
    Raster(String),
}

impl LogoData {
    pub fn data_uri(&self) -> String {
        match self {
            LogoData::Svg(content) => {
                format!("data:image/svg+xml;base64,{}", BASE64.encode(content))
            }
            LogoData::Raster(uri) => uri.clone(),
        }
    }
}

/// Finds logo files for entities: an exact-name override table first (only
/// honored when the file actually exists), then extension probing directly
/// under the logos root. Entities that resolve to nothing render as a
/// two-letter monogram, never an error.
#[derive(Debug, Clone)]
pub struct LogoResolver {
    logos_dir: PathBuf,
}

impl LogoResolver {
    pub fn new(logos_dir: impl Into<PathBuf>) -> Self {
        Self {
            logos_dir: logos_dir.into(),
        }
    }

    pub fn resolve(&self, entity: &str) -> Option<PathBuf> {
        if let Some(rel) = OVERRIDES.get(entity) {
            let path = self.logos_dir.join(rel);
            if path.exists() {
                return Some(path);
            }
        }
        for ext in EXTENSIONS {
            let path = self.logos_dir.join(format!("{entity}{ext}"));
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    pub fn load(&self, entity: &str) -> Option<LogoData> {
        load_file(&self.resolve(entity)?)
    }

    pub fn data_uri(&self, entity: &str) -> Option<String> {
        self.load(entity).map(|data| data.data_uri())
    }
}

pub fn load_file(path: &Path) -> Option<LogoData> {
    let data = std::fs::read(path).ok()?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if ext == "svg" {
        return Some(LogoData::Svg(String::from_utf8_lossy(&data).into_owned()));
    }
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        _ => "image/png",
    };
    Some(LogoData::Raster(format!(
        "data:{mime};base64,{}",
        BASE64.encode(&data)
    )))
}

/// Exact-name lookup table: entity -> path relative to the logos root.
/// Filenames are whatever the asset drop used; do not normalize them.
static OVERRIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Wallets
        ("HashPack", "wallets/HashPack-CircleLogo_V1.svg"),
        ("Kabila", "wallets/Kabila-CircleLogo.svg"),
        ("Wallawallet", "wallets/wallawallet.jpg"),
        ("Citadel Wallet", "wallets/CitadelWallet-CircleLogo.png.webp"),
        ("Exodus", "wallets/Exodus-CircleLogo.svg"),
        ("D'CENT", "wallets/DCENT-CircleLogo.svg"),
        ("Atomic Wallet", "wallets/AtomicWallet-CircleLogo.svg"),
        ("Guarda", "wallets/Guarda-CircleLogo.svg"),
        ("Dfns", "wallets/Dfns-CircleLogo.svg"),
        ("MetaMask Wallet Snap", "wallets/MetaMask_Wallet_Snap-CircleLogo.png.webp"),
        ("Venly", "wallets/Venly-CircleLogo.svg"),
        ("WalletConnect", "wallets/WalletConnect-CircleLogo.svg"),
        // Custodians
        ("BitGo", "Custodians/BitGo-CircleLogo.svg"),
        ("Fireblocks", "Custodians/Fireblocks-CircleLogo.svg"),
        ("Hex Trust", "Custodians/HexTrust-CircleLogo.svg"),
        ("Ledger", "Custodians/Ledger-CircleLogo.svg"),
        ("Anchorage Digital", "Custodians/AnchorageDigital-CircleLogo.svg"),
        ("Copper", "Custodians/Copper-CircleLogo.svg"),
        // Exchanges
        ("Binance", "Exchanges/Binance-CircleLogo.svg"),
        ("Coinbase", "Exchanges/Coinbase-CircleLogo.svg"),
        ("Kraken", "Exchanges/Kraken-CircleLogo.svg"),
        ("KuCoin", "Exchanges/KuCoin-CircleLogo.svg"),
        ("Bybit", "Exchanges/Bybit-CircleLogo.svg"),
        ("Gate.io", "Exchanges/Gate_io-CircleLogo.svg"),
        ("Crypto.com", "Exchanges/Crypto_com-CircleLogo.svg"),
        ("HTX", "Exchanges/HTX-CircleLogo.svg"),
        ("MEXC", "Exchanges/MEXC-CircleLogo.svg"),
        ("Bitvavo", "Exchanges/Bitvavo-CircleLogo.svg"),
        ("Robinhood", "Exchanges/Robinhood-CircleLogo.svg"),
        ("BitMart", "Exchanges/BitMart-CircleLogo.svg"),
        ("LBank", "Exchanges/LBank-CircleLogo.svg"),
        ("WhiteBit", "Exchanges/WhiteBit-CircleLogo.svg"),
        ("BTCC", "Exchanges/BTCC-CircleLogo.svg"),
        ("Bingx", "Exchanges/Bingx-CircleLogo.svg"),
        ("Bit2Me", "Exchanges/Bit2Me-CircleLogo.svg"),
        ("BitGet", "Exchanges/BitGet-CircleLogo.png"),
        ("Bithumb", "Exchanges/Bithumb-CircleLogo.png"),
        ("Bitrue", "Exchanges/Bitrue-CircleLogo.png.webp"),
        ("DigiFinex", "Exchanges/DigiFinex-CircleLogo.svg"),
        ("FMFW", "Exchanges/FMFW-CircleLogo.svg"),
        ("HiBT", "Exchanges/HiBT-CircleLogo.png.webp"),
        ("HitBTC", "Exchanges/HitBTC-CircleLogo.svg"),
        ("Hotcoin", "Exchanges/Hotcoin-CircleLogo.png"),
        ("KCEX", "Exchanges/KCEX-CircleLogo.png.webp"),
        ("TooBit", "Exchanges/TooBit-CircleLogo.svg"),
        ("XT", "Exchanges/XT-CircleLogo.png"),
        // Oracles
        ("Chainlink", "Oracles/Chainlink-CircleLogo.svg"),
        ("Pyth", "Oracles/Pyth-CircleLogo.svg"),
        ("Supra", "Oracles/Supra-CircleLogo.svg"),
        // Bridges and Interoperability
        ("Hashport", "Bridges and Interoperability/Hashport-CircleLogo.svg"),
        ("Axelar", "Bridges and Interoperability/Axelar-CircleLogo.svg"),
        ("LayerZero", "Bridges and Interoperability/LayerZero-CircleLogo.svg"),
        ("Stargate Finance", "Bridges and Interoperability/StargateFinance-CircleLogo_V1.png"),
        ("Ownera", "Bridges and Interoperability/Ownera-CircleLogo_V1.png"),
        ("XP Network", "Bridges and Interoperability/XP_Network-CircleLogo.png"),
        // Services
        ("Arkhia", "Services/Arkhia-CircleLogo.png"),
        ("Hgraph", "Services/HGraph-CircleLogo.png"),
        ("Validation Cloud", "Services/ValidationCloud-CircleLogo.svg"),
        ("QuickNode", "Services/QuickNode-CircleLogo.svg"),
        ("LinkPool", "Services/LinkPool-CircleLogo.svg"),
        ("Buidler Labs", "Services/BuidlerLabs-CircleLogo.png.webp"),
        ("Envision Blockchain", "Services/EnvisionBlockchain-CircleLogo.svg"),
        ("The Binary Holdings", "Services/TheBinaryHoldings-CircleLogo.png.webp"),
        // Onramps
        ("Banxa", "Onramps/Banxa-CircleLogo.svg"),
        ("MoonPay", "Onramps/MoonPay-CircleLogo.svg"),
        ("Transak", "Onramps/Transak-CircleLogo.svg"),
        ("C14", "Onramps/C14-CircleLogo.png.webp"),
        ("Metallicius", "Onramps/Metallicius-CircleLogo.png.webp"),
        // Implementation Partners
        ("LimeChain", "Implementation Partners/Limechain-CircleLogo.svg"),
        ("ioBuilders", "Implementation Partners/ioBuilders-CircleLogo.svg"),
        ("IntellectEU", "Implementation Partners/IntellectEU-CircleLogo.svg"),
        ("Lab49", "Implementation Partners/Lab49-CircleLogo.svg"),
        ("Object Computing", "Implementation Partners/ObjectComputing-CircleLogo.svg"),
        ("BCW", "Implementation Partners/BCW-CircleLogo.svg"),
        ("Seisan", "Implementation Partners/Seisan-CircleLogo.png.webp"),
        ("Unicsoft", "Implementation Partners/Unicsoft-CircleLogo.svg"),
        ("VMO Holdings", "Implementation Partners/VMO_Holdings-CircleLogo.png"),
        ("Varmeta", "Implementation Partners/Varmeta-CircleLogo.svg"),
        ("Web3Genes", "Implementation Partners/Web3Genes-CircleLogo.png"),
        // Advisory Firms
        ("Accenture", "Advisory Firms/Accenture-CircleLogo.svg"),
        ("NTT Data", "Advisory Firms/NTT_Data-CircleLogo.svg"),
        // Risk and Compliance
        ("TRM Labs", "Risk and Compliance/TRM-CircleLogo.svg"),
        ("Elliptic", "Risk and Compliance/Elliptic-CircleLogo.svg"),
        ("Merkle Science", "Risk and Compliance/Merkle_Science-CircleLogo.svg"),
        ("Chainabuse", "Risk and Compliance/Chainabuse-CircleLogo.svg"),
        ("Fortress", "Risk and Compliance/Fortress-CircleLogo.svg"),
        // Stablecoin Infrastructure
        ("Brale", "Stablecoin Infrastructure/Brale_xyz-CircleLogo.svg"),
        ("Ichi", "Stablecoin Infrastructure/Ichi-CircleLogo.svg"),
        ("Ubyx", "Stablecoin Infrastructure/Ubyx-CircleLogo.png.webp"),
        // Tooling and Solutions
        ("The Graph", "Tooling and Solutions/TheGraph-CircleLogo.svg"),
        ("Joget", "Tooling and Solutions/Joget-CircleLogo.svg"),
        ("KiloScribe", "Tooling and Solutions/KiloScribe-CircleLogo.png.webp"),
        ("Hashgraph Online", "Tooling and Solutions/Hashgraph Online.webp"),
        ("Demia", "Tooling and Solutions/Demia-CircleLogo.png.webp"),
        ("StegX", "Tooling and Solutions/StegX-CircleLogo.png"),
        ("Tuum", "Tooling and Solutions/Tuum-CircleLogo.svg"),
        ("Turtle Moon", "Tooling and Solutions/Turtle Moon.png"),
        ("TierBot", "Tooling and Solutions/TierBot AI.png"),
        ("Neuron", "iot/Neuron World.jpg"),
        ("Hashgraph.Name", "DEXs/HashNames.jpg"),
        // DeFi
        ("SaucerSwap", "defi/saucerswap.jpg"),
        ("HeliSwap", "defi/heliswap.jpg"),
        ("Pangolin", "defi/Pangolin.jpg"),
        ("Bonzo Finance", "defi/Bonzo Finance Labs.jpg"),
        ("Stader Labs", "defi/Stader Labs.jpg"),
        ("Swarm Markets", "defi/swarm-markets.jpg"),
        ("Hsuite", "defi/Hsuite.jpg"),
        ("Diffuse Labs", "DEXs/Diffuse Labs.jpg"),
        ("ETA Swap", "DEXs/ETA Swap.jpg"),
        ("Memejob", "DEXs/Memejob.jpg"),
        ("Orbit", "DEXs/Orbit.png"),
        ("Silk Suite", "DEXs/Silk Suite.jpg"),
        // NFT Markets
        ("Hashinals", "NFT Markets/hashinals.jpg"),
        ("SentX", "NFT Markets/sentx.jpg"),
        ("Altlantis", "NFT Markets/Altlantis.jpg"),
        // Real World Assets
        ("Diamond Standard", "rwas/diamond-standard.jpg"),
        ("RedSwan", "rwas/redswan.jpg"),
        ("Dovu", "rwas/dovu.jpg"),
        ("Tokeny", "rwas/tokeny.jpg"),
        ("Zoniqx", "rwas/zoniqx.jpg"),
        ("Archax", "rwas/archax.jpg"),
        ("EcoGuard", "rwas/Ecogard.jpg"),
        ("Verra Guardian", "rwas/Verra Guardian.jpg"),
        ("Isle Finance", "rwas/Isle Finance.jpg"),
        ("Gilmore Estates", "rwas/Gilmore Estates.jpg"),
        // Gaming & ENT
        ("Moonscape", "entertainment/Moonscape.jpg"),
        ("Tune.fm", "entertainment/Tune.fm.jpg"),
        ("Earthlings Land", "entertainment/Earthlings Land.jpg"),
        ("Angry Roll", "entertainment/Angry Roll.jpg"),
        ("Hedera Coin Flip", "entertainment/Hedera Coin Flip.png"),
        ("Legends of the Past", "entertainment/Legends of the past.jpg"),
        ("Shibar", "entertainment/Shibar.jpg"),
        ("The Barking Game", "entertainment/The Barking Game.jpg"),
        ("Trade Games", "entertainment/Trade Games.png"),
        ("Skelly Bets", "entertainment/skelly bets.jpg"),
        // Meme Tokens
        ("Boring", "meme/Boring.jpg"),
        ("Dino", "meme/Dino.png"),
        ("Dosa", "meme/Dosa.jpg"),
        ("Gib", "meme/Gib.jpg"),
        ("Grelf", "meme/Grelf.jpg"),
        ("Hert", "meme/Hert.png"),
        ("Leemon", "meme/Leemon.jpg"),
        ("Sara", "meme/Sara.jpg"),
        ("Smackm", "meme/Smackm.jpg"),
        ("Soot", "meme/Soot.jpg"),
        ("Jeeteroo", "meme/Jeeteroo.jpg"),
        // Infrastructure extras
        ("EQTY Lab", "infrastructure/EQTY Lab.jpg"),
        ("Tashi Network", "infrastructure/Tashi Network.jpg"),
        ("HNS", "infrastructure/HNS Hedera Naming Service.png"),
        ("The Hashgraph Group", "infrastructure/The Hashgraph Group.jpg"),
        // Core organizations (full size logos)
        ("Hashgraph", "core/Hashgraph full size.svg"),
        ("Hashgraph Full", "core/Hashgraph full size.svg"),
        ("Hedera Council", "core/Hedera Council full size.svg"),
        ("Hedera Foundation", "core/Hedera Foundation full size.svg"),
        ("Hedera Foundation Full", "core/Hedera Foundation full size.svg"),
        ("The Hashgraph Association", "core/The Hashgraph Assoication full size.svg"),
        ("The Hashgraph Association Full", "core/The Hashgraph Assoication full size.svg"),
        ("Exponential Science", "core/Exponetntial Science full size.svg"),
        ("Exponential Science Full", "core/Exponetntial Science full size.svg"),
        // Council members
        ("Google", "council/google-logo-box.svg"),
        ("IBM", "council/ibm.svg"),
        ("Boeing", "council/boeing.svg"),
        ("Dell", "council/dell.svg"),
        ("Deutsche Telekom", "council/deutsche-telekom.svg"),
        ("LG Electronics", "council/lg-electronics.svg"),
        ("Nomura", "council/nomura.svg"),
        ("Ubisoft", "council/ubisoft-logo-box.svg"),
        ("UCL", "council/university-college-london-ucl-seeklogo.svg"),
        ("Shinhan Bank", "council/shinhan-bank.svg"),
        ("DLA Piper", "council/dla-piper-logo-box.svg"),
        ("EDF", "council/edf-logo-box.svg"),
        ("eftpos", "council/eftpos.svg"),
        ("Hitachi", "council/hitachi.svg"),
        ("Swirlds Labs", "council/swirlds-labs.svg"),
        ("Tata Communications", "council/tata-communications.svg"),
        ("Worldpay", "council/Worldpay_logo_c_rgb.svg"),
        ("LSE", "council/lse.svg"),
        ("abrdn", "council/aberdeen-logo-box.svg"),
        ("Mondelez", "council/mondelez-logo-box.svg"),
        ("ServiceNow", "council/servicenow-logo-box.svg"),
        ("Zain Group", "council/zain-logo-box.svg"),
        ("Arrow", "council/arrow-logo-box.svg"),
        ("Cofra", "council/cofra-logo-box.svg"),
        ("Dentons", "council/dentons-logo-box.svg"),
        ("IIT Madras", "council/iit-madras-logo-box.svg"),
        ("Magalu", "council/magalu-logo-box.svg"),
        ("Repsol", "council/repsol-logo-white-flat.svg"),
        ("Blockchain for Energy", "council/blockchain-for-energy-logo-box.svg"),
        ("GBBC", "council/GBBClogo.png"),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_logo_resolves_to_none() {
        let resolver = LogoResolver::new("/definitely/not/a/real/dir");
        assert!(resolver.resolve("Chainlink").is_none());
        assert!(resolver.load("Chainlink").is_none());
    }

    #[test]
    fn extension_probe_finds_plain_files() {
        let dir = std::env::temp_dir().join("ecomap-logo-probe-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("Acme.svg");
        std::fs::write(&path, "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();

        let resolver = LogoResolver::new(&dir);
        assert_eq!(resolver.resolve("Acme"), Some(path.clone()));
        match resolver.load("Acme") {
            Some(LogoData::Svg(content)) => assert!(content.contains("<svg")),
            other => panic!("expected svg logo, got {other:?}"),
        }

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn override_table_is_only_honored_when_file_exists() {
        // Chainlink has an override entry, but the directory is empty, so
        // resolution falls through to probing and then None.
        let dir = std::env::temp_dir().join("ecomap-logo-override-test");
        std::fs::create_dir_all(&dir).unwrap();
        let resolver = LogoResolver::new(&dir);
        assert!(resolver.resolve("Chainlink").is_none());
    }

    #[test]
    fn raster_data_uri_gets_the_right_mime() {
        let dir = std::env::temp_dir().join("ecomap-logo-mime-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("Pixel.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        match load_file(&path) {
            Some(LogoData::Raster(uri)) => assert!(uri.starts_with("data:image/png;base64,")),
            other => panic!("expected raster logo, got {other:?}"),
        }
        std::fs::remove_file(path).ok();
    }
}

use crate::chain::model::{Wallet, WalletExport};

/// What the dashboard is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardMode {
    /// No session: offer create / import.
    NoWallet,
    /// A wallet was just created and its secrets must be shown once.
    JustCreated(WalletExport),
    /// Normal balance + activity view.
    Active(Wallet),
}

impl DashboardMode {
    pub fn wallet(&self) -> Option<&Wallet> {
        match self {
            DashboardMode::Active(wallet) => Some(wallet),
            _ => None,
        }
    }

    /// Address whose activity is on screen.
    pub fn address(&self) -> Option<&str> {
        self.wallet().map(|w| w.address.as_str())
    }
}

//! Helper tool to render the two fixed badge compositions for every team

#[cfg(feature = "tool-logo-preview")]
mod logo_preview;

#[cfg(feature = "tool-logo-preview")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logo_preview::run().await
}

#[cfg(not(feature = "tool-logo-preview"))]
fn main() {}

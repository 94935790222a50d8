#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ppage_cli::run().await
}

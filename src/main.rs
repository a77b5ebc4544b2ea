#[tokio::main]
async fn main() -> anyhow::Result<()> {
    arstyle_lib::bootstrap::run_app().await
}

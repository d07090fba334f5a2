#[tokio::main]
async fn main() -> Result<(), String> {
    tsunagi::provider::main().await
}

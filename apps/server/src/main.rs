#[tokio::main]
async fn main() -> anyhow::Result<()> {
    date_quiz_server::run().await
}

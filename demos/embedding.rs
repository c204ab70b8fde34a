use aipost::openai::{Embedding, OpenAI, OpenAIConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let client = OpenAI::from_env()?;
    let payload = Embedding::default().set_input("This is a test sentence for embedding.");
    let raw = client.send(&payload).await?;
    println!("{raw}");

    Ok(())
}

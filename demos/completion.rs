use aipost::openai::{Completion, OpenAI, OpenAIConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let client = OpenAI::from_env()?;
    let payload = Completion::default()
        .set_prompt("This is a test. The AI will continue writing after this sentence.");
    let raw = client.send(&payload).await?;
    println!("{raw}");

    Ok(())
}

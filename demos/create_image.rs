use aipost::openai::{Image, OpenAI, OpenAIConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let client = OpenAI::from_env()?;
    let payload = Image::default().set_prompt("a white siamese cat");
    let raw = client.send(&payload).await?;
    println!("{raw}");

    Ok(())
}

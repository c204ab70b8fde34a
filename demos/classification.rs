use aipost::openai::{Classification, OpenAI};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let client = OpenAI::from_env()?;
    let payload = Classification::sentiment("I love sunny days but hate the rain.");
    let raw = client.send(&payload).await?;
    println!("{raw}");

    Ok(())
}

use dossier_core::{ChatRequest, Message, Role};
use dossier_interface::ChatDriver;
use dossier_models::GroqClient;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_groq_basic_generation() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let api_key = std::env::var("GROQ_API_KEY")?;
    let client = GroqClient::new(api_key, "llama3-8b-8192");

    let request = ChatRequest::builder()
        .messages(vec![Message::new(Role::User, "Hello")])
        .max_tokens(10u32)
        .build()?;

    let response = client.generate(&request).await?;

    assert!(!response.text.is_empty(), "Should receive non-empty response");
    println!("Response: {:?}", response.text);

    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_groq_system_prompt_steering() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let api_key = std::env::var("GROQ_API_KEY")?;
    let client = GroqClient::new(api_key, "llama3-8b-8192");

    let request = ChatRequest::builder()
        .system("Answer with a single word.".to_string())
        .messages(vec![Message::new(Role::User, "What color is the sky?")])
        .max_tokens(10u32)
        .build()?;

    let response = client.generate(&request).await?;

    assert!(!response.text.is_empty());
    Ok(())
}

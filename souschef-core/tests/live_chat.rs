//! Live integration test against a real completions endpoint
//!
//! Run with: cargo test -p souschef-core --test live_chat -- --ignored --nocapture

use anyhow::Result;
use souschef_core::{Config, Message, Role, get_agent_response};

#[tokio::test]
#[ignore] // Requires API key, run with: cargo test --ignored
async fn test_live_single_turn() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let history = vec![Message::user(
        "I have eggs, butter and some cheese. What can I cook?",
    )];
    let updated = get_agent_response(&history, &config).await?;

    assert_eq!(updated.len(), 3);
    assert_eq!(updated[0].role, Role::System);
    let last = updated.last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert!(!last.content.is_empty());
    assert_eq!(last.content, last.content.trim());

    println!("{}", last.content);
    Ok(())
}

#[tokio::test]
#[ignore] // Requires API key, run with: cargo test --ignored
async fn test_live_follow_up_keeps_history() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let first = get_agent_response(&[Message::user("Suggest a quick pasta dish.")], &config).await?;
    let mut history = first.clone();
    history.push(Message::user("Can you make it vegetarian?"));

    let second = get_agent_response(&history, &config).await?;

    // One system message up front, one new assistant turn at the end
    assert_eq!(second.len(), history.len() + 1);
    assert_eq!(second[0].role, Role::System);
    assert_eq!(
        second.iter().filter(|m| m.role == Role::System).count(),
        1
    );
    assert_eq!(second.last().unwrap().role, Role::Assistant);

    Ok(())
}

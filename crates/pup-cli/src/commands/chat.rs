//! Chat with Alberto, one-shot or as a terminal loop

use std::io::{self, BufRead, Write};

use console::style;
use pup_core::{PupClient, PupResult};

use super::ClientArgs;

pub async fn run(
    connection: &ClientArgs,
    message: Option<&str>,
    interactive: bool,
) -> anyhow::Result<()> {
    let mut client = connection.connect().await?;

    let outcome = if interactive {
        interactive_chat(&client).await
    } else if let Some(message) = message {
        send_message(&client, message).await
    } else {
        println!("Please provide a message with --message or use --interactive mode");
        Ok(())
    };

    client.close();
    Ok(outcome?)
}

async fn send_message(client: &PupClient, message: &str) -> PupResult<()> {
    let response = client.say_woof(message).await?;
    print_reply(&response.response, response.reasoning.as_deref());
    Ok(())
}

/// Prompt loop. Ends on `quit`/`exit`/`q`, end of input, or a failed
/// round trip.
async fn interactive_chat(client: &PupClient) -> PupResult<()> {
    println!("{}", style("Alberto Interactive Chat").bold());
    println!("Type 'quit', 'exit', or press Ctrl+C to stop\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("You: ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {}
        }

        let message = line.trim();
        if matches!(message.to_lowercase().as_str(), "quit" | "exit" | "q") {
            println!("Goodbye!");
            break;
        }
        if message.is_empty() {
            continue;
        }

        match client.say_woof(message).await {
            Ok(response) => print_reply(&response.response, response.reasoning.as_deref()),
            Err(e) => {
                println!("Error during chat: {}", e);
                break;
            }
        }
    }

    Ok(())
}

fn print_reply(response: &str, reasoning: Option<&str>) {
    println!("{} {}", style("Alberto:").cyan().bold(), response);
    if let Some(reasoning) = reasoning {
        println!("{} {}", style("Reasoning:").dim(), style(reasoning).dim());
    }
}

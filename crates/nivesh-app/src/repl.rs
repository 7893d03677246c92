//! Interactive chat loop.
//!
//! Reads lines from stdin, submits them to the conversation controller,
//! and prints each appended message. Printing on every append is the
//! terminal analog of the original page's scroll-to-latest behavior.

use std::io::{BufRead, Write};

use nivesh_chat::{ChatError, ConversationController};
use nivesh_core::error::Result;
use nivesh_core::types::Message;

/// Run the chat REPL until EOF or an exit command.
pub async fn run(mut controller: ConversationController) -> Result<()> {
    println!("Nivesh Investment Advisor");
    println!("Ask me about investments... (type 'exit' to quit)");
    println!();

    for message in controller.messages() {
        print_message(message);
    }

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = line.trim_end_matches(['\r', '\n']);
        if matches!(input.trim(), "exit" | "quit") {
            break;
        }

        match controller.submit(input) {
            Ok(()) => {}
            // Blank input does nothing, same as the original send button.
            Err(ChatError::EmptyMessage) => continue,
            Err(ChatError::ReplyPending) => continue,
            Err(e) => return Err(e.into()),
        }

        if let Some(message) = controller.messages().last() {
            print_message(message);
        }

        println!("Advisor is typing...");
        let reply = controller.deliver_reply().await?;
        print_message(&reply);
    }

    println!("Goodbye!");
    Ok(())
}

/// Print one log entry with its hour:minute stamp.
pub fn print_message(message: &Message) {
    println!(
        "[{}] {}: {}",
        message.time_label(),
        message.sender.display_name(),
        message.text
    );
}

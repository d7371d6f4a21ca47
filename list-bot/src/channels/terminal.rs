//! Interactive terminal harness for trying commands without a chat platform

use crate::commands;
use crate::lists::ListStore;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const WELCOME: &str = "🤖 List Bot CLI\n\
    Type 'help' for commands or 'quit' to exit\n\
    ----------------------------------------\n\n\
    💡 Quick start:\n\
    • create groceries\n\
    • add groceries milk\n\
    • multi groceries bread, eggs, butter\n\
    • show groceries\n\
    • lists\n";

pub const GOODBYE: &str = "👋 Goodbye!";

const INVALID_INPUT: &str = "❌ Error: input line is not valid UTF-8";

fn is_quit(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "exit" | "q")
}

/// Read commands line by line until `quit` or end of input, writing each
/// reply to `output`. Unknown keywords are answered, not ignored, and a
/// line that fails to decode gets an error reply without ending the session.
pub async fn run<R, W>(store: &mut ListStore, mut input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(WELCOME.as_bytes()).await?;
    let mut buf = Vec::new();

    loop {
        output.write_all(b"\n> ").await?;
        output.flush().await?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            output.write_all(format!("\n{}\n", GOODBYE).as_bytes()).await?;
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                log::warn!("Terminal: Skipping undecodable line: {}", e);
                output.write_all(INVALID_INPUT.as_bytes()).await?;
                output.write_all(b"\n").await?;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }
        if is_quit(line) {
            output.write_all(format!("{}\n", GOODBYE).as_bytes()).await?;
            break;
        }

        let reply = commands::respond(line, store, None);
        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }

    output.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use list_bot_types::ListLimits;

    async fn session(script: &str) -> (ListStore, String) {
        let mut store = ListStore::new(ListLimits::default());
        let mut output = Vec::new();
        run(&mut store, script.as_bytes(), &mut output).await.unwrap();
        (store, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_session_runs_until_quit() {
        let (store, out) = session(
            "create groceries\nmulti groceries milk, bread\n\nshow groceries\nQUIT\nadd groceries late\n",
        )
        .await;

        assert!(out.starts_with(WELCOME));
        assert!(out.contains("✅ Created list 'groceries'"));
        assert!(out.contains("1. milk\n2. bread"));
        assert!(out.trim_end().ends_with(GOODBYE));
        assert_eq!(store.show("groceries").unwrap().items(), vec!["milk", "bread"]);
    }

    #[tokio::test]
    async fn test_unknown_commands_are_answered() {
        let (_, out) = session("dance\n").await;
        assert!(out.contains("Unknown command: dance"));
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let (store, out) = session("create a").await;
        assert_eq!(store.len(), 1);
        assert!(out.trim_end().ends_with(GOODBYE));
    }

    #[tokio::test]
    async fn test_undecodable_line_does_not_end_session() {
        let mut store = ListStore::new(ListLimits::default());
        let mut output = Vec::new();
        run(&mut store, &b"create a\n\xff\xfe\ncreate b\n"[..], &mut output)
            .await
            .unwrap();

        let out = String::from_utf8(output).unwrap();
        assert!(out.contains(INVALID_INPUT));
        assert!(out.contains("✅ Created list 'b'"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_quit_words() {
        assert!(is_quit("quit"));
        assert!(is_quit("Exit"));
        assert!(is_quit("q"));
        assert!(!is_quit("quiet"));
    }
}

/*
[INPUT]:  Base URL of a running task API, email and password
[OUTPUT]: Task list printed to stdout
[POS]:    Examples - login and task listing
[UPDATE]: When the login or task endpoints change
*/

use task_app_adapter::*;

/// Example: log in, then list tasks
///
/// Usage: cargo run --example list_tasks_example -- http://127.0.0.1:5000 user@example.com secret
#[tokio::main]
async fn main() {
    println!("=== Task API Example ===\n");

    let mut args = std::env::args().skip(1);
    let base_url = args.next().unwrap_or_else(|| "http://127.0.0.1:5000".to_string());
    let email = args.next().unwrap_or_else(|| "user@example.com".to_string());
    let password = args.next().unwrap_or_default();

    let client = match TaskAppClient::new(&base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}", client.base_url());

    match client.login(&email, &password).await {
        Ok(()) => println!("✓ Logged in as {}", email),
        Err(e) => {
            println!("✗ Login failed: {}", e);
            return;
        }
    }

    match client.list_tasks().await {
        Ok(tasks) if tasks.is_empty() => println!("\nNo tasks."),
        Ok(tasks) => {
            println!("\n{} tasks:", tasks.len());
            for task in tasks {
                let mark = if task.status.is_done() { "x" } else { " " };
                println!("  [{}] #{} {}", mark, task.id, task.title);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }
}

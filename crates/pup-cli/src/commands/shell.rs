//! Remote shell command execution

use pup_core::types::ShellCommand;

use super::ClientArgs;

pub async fn run(
    connection: &ClientArgs,
    command: &str,
    cwd: Option<&str>,
    timeout: u64,
) -> anyhow::Result<()> {
    let mut shell_command = ShellCommand::new(command).with_timeout(timeout);
    if let Some(dir) = cwd {
        shell_command = shell_command.with_working_directory(dir);
    }

    let mut client = connection.connect().await?;
    let outcome = client.run_command(shell_command).await;
    client.close();
    let result = outcome?;

    println!("Command: {}", result.command);
    match result.exit_code {
        Some(code) => println!("Exit code: {}", code),
        None => println!("Exit code: unknown"),
    }
    println!("Execution time: {:.2}s", result.execution_time);

    if let Some(stdout) = result.stdout.as_deref().filter(|s| !s.is_empty()) {
        println!("STDOUT:\n{}", stdout);
    }
    if let Some(stderr) = result.stderr.as_deref().filter(|s| !s.is_empty()) {
        println!("STDERR:\n{}", stderr);
    }

    Ok(())
}

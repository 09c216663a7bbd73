//! File listing and reading subcommands

use console::style;

use super::ClientArgs;

pub async fn ls(connection: &ClientArgs, directory: &str, recursive: bool) -> anyhow::Result<()> {
    let mut client = connection.connect().await?;
    let outcome = client.list_files(directory, recursive).await;
    client.close();
    let files = outcome?;

    if files.is_empty() {
        println!("No files found in {}", directory);
        return Ok(());
    }

    println!("Files in {}:", directory);
    for file in &files {
        let marker = if file.is_directory {
            style("DIR ").cyan().bold()
        } else {
            style("FILE").dim()
        };
        let size = if file.is_file {
            format!("{}B", file.size)
        } else {
            String::new()
        };
        println!("  {} {:<30} {}", marker, file.name, size);
    }

    Ok(())
}

pub async fn cat(
    connection: &ClientArgs,
    file_path: &str,
    start_line: Option<u32>,
    num_lines: Option<u32>,
) -> anyhow::Result<()> {
    let mut client = connection.connect().await?;
    let outcome = client.read_file(file_path, start_line, num_lines).await;
    client.close();
    let content = outcome?;

    println!("Contents of {}:", file_path);
    if content.is_empty() {
        println!("(empty file)");
        return Ok(());
    }

    let first = start_line.unwrap_or(1);
    for (offset, line) in content.lines().enumerate() {
        println!("{:4} | {}", first + offset as u32, line);
    }

    Ok(())
}

//! Text search across backend files

use console::style;

use super::ClientArgs;

pub async fn run(
    connection: &ClientArgs,
    query: &str,
    directory: &str,
    max_results: u32,
) -> anyhow::Result<()> {
    let mut client = connection.connect().await?;
    let outcome = client
        .search_files(query, Some(directory), Some(max_results))
        .await;
    client.close();
    let results = outcome?;

    if results.is_empty() {
        println!("No results found for '{}' in {}", query, directory);
        return Ok(());
    }

    println!("Search results for '{}':", query);
    for result in &results {
        println!(
            "  {}:{}",
            style(&result.file_path).bold(),
            result.line_number
        );
        println!("     {}", result.line_content.trim());
        println!();
    }

    Ok(())
}

//! Backend status report

use console::style;

use super::ClientArgs;

pub async fn run(connection: &ClientArgs) -> anyhow::Result<()> {
    let mut client = connection.connect().await?;
    let outcome = client.get_status().await;
    client.close();
    let status = outcome?;

    println!("{}", style("Alberto Status:").bold());
    println!(
        "  Available: {}",
        if status.available { "Yes" } else { "No" }
    );
    println!("  Version: {}", status.version);
    if let Some(directory) = &status.current_directory {
        println!("  Current dir: {}", directory);
    }
    if let Some(uptime) = status.uptime {
        println!("  Uptime: {:.1}s", uptime);
    }

    println!("  Capabilities:");
    for capability in &status.capabilities {
        let marker = if capability.enabled {
            style("OK").green()
        } else {
            style("DISABLED").red()
        };
        println!("    {} {} - {}", marker, capability.name, capability.description);
    }

    Ok(())
}

//! Interactive testing menu: read one command, run the matching operation,
//! repeat until the operator exits.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use ridecheck_domain::IngestApi;

use crate::config::HarnessConfig;
use crate::ops;

const MENU_SIMULATION_SECS: u64 = 30;

fn print_menu() {
    println!();
    println!("ridecheck testing menu:");
    println!("  1. health check");
    println!("  2. send normal envelope");
    println!("  3. simulate accident");
    println!("  4. check emergency alerts");
    println!("  5. continuous simulation ({MENU_SIMULATION_SECS}s)");
    println!("  6. full test suite");
    println!("  7. exit");
}

pub async fn run(client: Arc<dyn IngestApi>, config: &HarnessConfig) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print_menu();
        print!("select option (1-7): ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "1" => {
                ops::health(&client).await;
            }
            "2" => ops::send_normal(&client).await,
            "3" => ops::send_accident(&client).await,
            "4" => ops::alerts(&client).await,
            "5" => ops::simulate(&client, MENU_SIMULATION_SECS).await,
            "6" => ops::suite(&client, config).await,
            "7" => {
                println!("testing complete");
                break;
            }
            other => println!("invalid option '{other}', choose 1-7"),
        }
    }

    Ok(())
}

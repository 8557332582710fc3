//! Connects to a RESP server and sends a single `PING`.
//!
//! ```text
//! cargo run --example ping -- 127.0.0.1:6379
//! ```

use std::env;

use respc::{connect, ConnectionConfig, SingleCommand};

fn main() -> respc::RespResult<()> {
    flexi_logger::Logger::try_with_env_or_str("info")
        .unwrap()
        .start()
        .unwrap();

    let addr = env::args().nth(1).unwrap_or_else(|| "127.0.0.1:6379".into());
    let mut conn = connect(&addr, ConnectionConfig::default())?;

    let command = SingleCommand::new(["PING"]).expect("PING takes no arguments").into();
    let replies = conn.call(&command)?;
    println!("{replies:?}");
    Ok(())
}

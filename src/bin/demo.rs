use std::io::{self, BufRead, Write};
use std::process;

use authsecure_client::{Client, ClientOptions, UserInfo};

fn main() {
    let mut client = Client::new(ClientOptions {
        name: "XD".to_string(),
        owner_id: "3ezshCmkXrn".to_string(),
        secret: "7a8bfeb28afcd690812ee5de010a6860".to_string(),
        version: "1.0".to_string(),
        debug: true,
    });

    // No session, no point continuing. Only the binary gets to exit;
    // the library reports init failures as plain errors.
    if let Err(err) = client.init() {
        eprintln!("Init failed: {}", err);
        process::exit(1);
    }

    println!("\n[1] Login\n[2] Register\n[3] License Login\n[4] Exit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let choice = prompt(&mut lines, "Choose option: ");

    let outcome = match choice.as_str() {
        "1" => {
            let username = prompt(&mut lines, "Username: ");
            let password = prompt(&mut lines, "Password: ");
            client
                .login(&username, &password)
                .map(|info| ("Logged in!", info))
        }
        "2" => {
            let username = prompt(&mut lines, "Username: ");
            let password = prompt(&mut lines, "Password: ");
            let license = prompt(&mut lines, "License: ");
            client
                .register(&username, &password, &license)
                .map(|info| ("Registered successfully!", info))
        }
        "3" => {
            let license = prompt(&mut lines, "License: ");
            client
                .license_login(&license)
                .map(|info| ("License login successful!", info))
        }
        _ => {
            println!("Goodbye!");
            return;
        }
    };

    match outcome {
        Ok((banner, info)) => {
            println!("{}", banner);
            display(info.as_ref());
        }
        // Recoverable: report and fall through to a normal exit.
        Err(err) => println!("Request failed: {}", err),
    }
}

fn display(info: Option<&UserInfo>) {
    if let Some(info) = info {
        println!("\n{}", info);
    }
}

fn prompt<I>(lines: &mut I, label: &str) -> String
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{}", label);
    io::stdout().flush().ok();
    lines
        .next()
        .and_then(|line| line.ok())
        .unwrap_or_default()
        .trim()
        .to_string()
}

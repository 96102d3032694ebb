use std::io::{self, Write as _};

use colored::*;
use uuid::Uuid;

use wakehub_client::config::Config;
use wakehub_client::domain::models::session::SessionStatus;
use wakehub_client::domain::services::booking_flow::{BOOK_FAILED_MSG, UPDATE_FAILED_MSG};
use wakehub_client::infra::factory::bootstrap_context;
use wakehub_client::init_logging;

#[tokio::main]
async fn main() {
    let _guard = init_logging();

    println!("{}", "🌊 WakeHub client smoke run".bold().green());

    let config = Config::from_env();
    println!("Target API: {}", config.api_base_url);
    let ctx = bootstrap_context(&config);

    if ctx.locations.list().await.is_err() {
        eprintln!("{}", "❌ Backend is NOT reachable. Start it or set WAKEHUB_API_URL.".red().bold());
        return;
    }

    println!("\n{}", "⚙️  Registering a throwaway account...".yellow());
    let suffix = Uuid::new_v4().simple().to_string();
    let username = format!("smoke-{}", &suffix[..8]);
    let email = format!("{}@smoke.wakehub.test", username);
    let password = "smoke-pass-1";

    if let Err(e) = ctx.auth_flow.register(&username, &email, password).await {
        eprintln!("{} {}", "❌ Registration failed:".red(), e.user_message("please try again"));
        return;
    }
    let user = match ctx.auth_flow.login(&email, password).await {
        Ok(user) => user,
        Err(e) => {
            eprintln!("{} {}", "❌ Login failed:".red(), e.user_message("please try again"));
            return;
        }
    };
    println!("{} {} ({})", "✅ Logged in as".green(), user.username, user.role.as_str());

    println!("\n{}", "⚙️  Loading the catalog...".yellow());
    let mut form = match ctx.booking_flow.create_form().await {
        Ok(form) => form,
        Err(e) => {
            eprintln!("{} {}", "❌ Catalog load failed:".red(), e.user_message("catalog unavailable"));
            return;
        }
    };
    println!("   Sessions: {}", form.catalog().sessions.len());
    println!("   Packages: {}", form.catalog().packages.len());

    let Some(session_id) = form
        .catalog()
        .sessions
        .iter()
        .find(|s| s.status == SessionStatus::Available)
        .map(|s| s.id.clone())
    else {
        eprintln!("{}", "❌ No available session to book. Seed the backend first.".red());
        return;
    };
    form.select_session(&session_id).expect("session came from the catalog");

    if let Some(package_id) = form.catalog().packages.first().map(|p| p.id.clone()) {
        form.toggle_package(&package_id).expect("package came from the catalog");
    }
    form.set_notes("Booked by the smoke driver");

    match form.total() {
        Some(total) => println!("   Price preview: {:.2}", total),
        None => println!("   Price preview: n/a"),
    }

    println!("\n{}", "⚙️  Submitting the booking...".yellow());
    let booking = match ctx.booking_flow.submit_new(&form).await {
        Ok(booking) => booking,
        Err(e) => {
            eprintln!("{} {}", "❌".red(), e.user_message(BOOK_FAILED_MSG));
            return;
        }
    };
    println!("{} {} (total {:.2})", "✅ Booked".green(), booking.id, booking.total_price);

    println!("\n{}", "⚙️  Editing the booking...".yellow());
    let (_, mut form) = match ctx.booking_flow.edit_form(&booking.id).await {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("{} {}", "❌ Could not open the booking for edit:".red(), e.user_message(UPDATE_FAILED_MSG));
            return;
        }
    };
    form.set_notes("Edited by the smoke driver");
    match ctx.booking_flow.submit_edit(&booking.id, &form).await {
        Ok(updated) => println!("{} notes = {:?}", "✅ Updated:".green(), updated.notes),
        Err(e) => {
            eprintln!("{} {}", "❌".red(), e.user_message(UPDATE_FAILED_MSG));
            return;
        }
    }

    println!("\n{}", "⚙️  Renaming the account...".yellow());
    match ctx.auth_flow.update_profile(&format!("{}-renamed", username)).await {
        Ok(profile) => println!("{} {}", "✅ Profile is now".green(), profile.username),
        Err(e) => eprintln!("{} {}", "⚠️  Profile update failed:".yellow(), e.user_message("please try again")),
    }

    println!("\n{}", "⚙️  Cancelling the booking...".yellow());
    match ctx.booking_flow.cancel(&booking.id, "Smoke run cleanup").await {
        Ok(cancelled) => println!(
            "{} status = {}, reason = {:?}",
            "✅ Cancelled:".green(),
            cancelled.status.as_str(),
            cancelled.cancellation_reason
        ),
        Err(e) => {
            eprintln!("{} {}", "❌".red(), e.user_message(UPDATE_FAILED_MSG));
            return;
        }
    }

    print!("\nDelete the test booking {}? [y/N] ", booking.id);
    let _ = io::stdout().flush();
    let mut answer = String::new();
    let confirmed = io::stdin().read_line(&mut answer).is_ok() && matches!(answer.trim(), "y" | "Y");
    if confirmed {
        match ctx.booking_flow.delete(&booking.id).await {
            Ok(()) => println!("{}", "✅ Deleted.".green()),
            Err(e) => eprintln!("{} {}", "❌ Delete failed:".red(), e.user_message("please try again")),
        }
    } else {
        println!("Skipped delete.");
    }

    ctx.auth_flow.logout();
    println!("\n{}", "🏁 Smoke run complete.".bold().green());
}

//! Numbered menu loop
//!
//! Reads a choice, prompts for the fields that action needs, calls the
//! session and prints the outcome. Business errors become messages; only
//! console I/O failures end the loop early.

use std::io::{BufRead, Write};

use crate::audit::AuditTrail;
use crate::display::{describe_error, format_audit_log, format_history, format_latest, format_overview};
use crate::error::{MeterError, MeterResult};
use crate::models::{CounterType, Month, Role};

use super::console::Console;
use super::session::Session;

const MENU: &[&str] = &[
    "1. Register",
    "2. Log in",
    "3. Submit reading",
    "4. Latest reading",
    "5. Reading history",
    "6. Audit log",
    "7. Exit",
];

const COUNTER_PROMPT: &str = "Counter type (HEATING, HOT_WATER, COLD_WATER): ";

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Unwrap a prompt result, leaving the action on end of input or on
/// unreadable input
macro_rules! answer {
    ($console:expr, $prompt:expr) => {
        match $prompt {
            Ok(Some(value)) => value,
            Ok(None) => return Ok(Step::Exit),
            Err(err) if err.is_business_error() => {
                $console.say(describe_error(&err))?;
                return Ok(Step::Continue);
            }
            Err(err) => return Err(err),
        }
    };
}

/// Run the menu until the user exits or input ends
pub fn run_menu<A, R, W>(session: &mut Session<'_, A>, console: &mut Console<R, W>) -> MeterResult<()>
where
    A: AuditTrail + ?Sized,
    R: BufRead,
    W: Write,
{
    loop {
        console.say("")?;
        for line in MENU {
            console.say(line)?;
        }

        let choice = match console.prompt("Choose an action: ") {
            Ok(Some(choice)) => choice,
            Ok(None) => break,
            Err(err) if err.is_business_error() => {
                console.say(describe_error(&err))?;
                continue;
            }
            Err(err) => return Err(err),
        };

        let step = match choice.trim() {
            "1" => register(session, console)?,
            "2" => login(session, console)?,
            "3" => submit_reading(session, console)?,
            "4" => latest_reading(session, console)?,
            "5" => history(session, console)?,
            "6" => audit_log(session, console)?,
            "7" | "q" | "quit" | "exit" => Step::Exit,
            "" => Step::Continue,
            other => {
                console.say(format!("Unknown choice '{}'. Please try again.", other))?;
                Step::Continue
            }
        };

        if step == Step::Exit {
            break;
        }
    }

    console.say("Goodbye.")?;
    Ok(())
}

/// Print the outcome of a session call
fn report<T, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: MeterResult<T>,
    on_success: impl FnOnce(T) -> String,
) -> MeterResult<Step> {
    let message = match result {
        Ok(value) => on_success(value),
        Err(err) => describe_error(&err),
    };
    console.say(message)?;
    Ok(Step::Continue)
}

/// Parse a reading value typed by the user
fn parse_reading_value(input: &str) -> MeterResult<i64> {
    input.trim().parse::<i64>().map_err(|_| {
        MeterError::Validation(format!(
            "Invalid reading '{}'. Expected a whole number.",
            input.trim()
        ))
    })
}

fn register<A, R, W>(session: &mut Session<'_, A>, console: &mut Console<R, W>) -> MeterResult<Step>
where
    A: AuditTrail + ?Sized,
    R: BufRead,
    W: Write,
{
    let username = answer!(console, console.prompt("Username: "));
    let password = answer!(console, console.prompt_secret("Password: "));
    let role = answer!(console, console.prompt("Role (USER or ADMIN): "));

    let result = role
        .parse::<Role>()
        .and_then(|role| session.register(&username, &password, role));

    report(console, result, |user| {
        format!("User '{}' registered as {}.", user.username, user.role)
    })
}

fn login<A, R, W>(session: &mut Session<'_, A>, console: &mut Console<R, W>) -> MeterResult<Step>
where
    A: AuditTrail + ?Sized,
    R: BufRead,
    W: Write,
{
    let username = answer!(console, console.prompt("Username: "));
    let password = answer!(console, console.prompt_secret("Password: "));

    let result = session
        .login(&username, &password)
        .map(|user| user.username.clone());

    report(console, result, |username| format!("Logged in as '{}'.", username))
}

fn submit_reading<A, R, W>(
    session: &mut Session<'_, A>,
    console: &mut Console<R, W>,
) -> MeterResult<Step>
where
    A: AuditTrail + ?Sized,
    R: BufRead,
    W: Write,
{
    if session.current_user().is_none() {
        return report::<(), _, _>(console, Err(MeterError::NotAuthenticated), |_| String::new());
    }

    let counter_input = answer!(console, console.prompt(COUNTER_PROMPT));
    let counter_type = match counter_input.parse::<CounterType>() {
        Ok(counter_type) => counter_type,
        Err(err) => return report::<(), _, _>(console, Err(err), |_| String::new()),
    };

    let month_input = answer!(console, console.prompt("Month (1-12): "));
    let month = match month_input.parse::<Month>() {
        Ok(month) => month,
        Err(err) => return report::<(), _, _>(console, Err(err), |_| String::new()),
    };

    let value_input = answer!(console, console.prompt("Reading: "));
    let result = parse_reading_value(&value_input)
        .and_then(|value| session.submit_reading(counter_type, month, value).map(|()| value));

    report(console, result, |value| {
        format!("Submitted {} reading for {}: {}.", counter_type, month, value)
    })
}

fn latest_reading<A, R, W>(
    session: &mut Session<'_, A>,
    console: &mut Console<R, W>,
) -> MeterResult<Step>
where
    A: AuditTrail + ?Sized,
    R: BufRead,
    W: Write,
{
    if session.current_user().is_none() {
        return report::<(), _, _>(console, Err(MeterError::NotAuthenticated), |_| String::new());
    }

    let counter_input = answer!(
        console,
        console.prompt("Counter type (HEATING, HOT_WATER, COLD_WATER, blank for all): ")
    );

    if counter_input.trim().is_empty() {
        let result = session.latest_readings();
        return report(console, result, |latest| {
            format_overview(&latest).trim_end().to_string()
        });
    }

    let result = counter_input
        .parse::<CounterType>()
        .and_then(|counter_type| {
            session
                .latest_reading(counter_type)
                .map(|value| (counter_type, value))
        });

    report(console, result, |(counter_type, value)| {
        format_latest(counter_type, value)
    })
}

fn history<A, R, W>(session: &mut Session<'_, A>, console: &mut Console<R, W>) -> MeterResult<Step>
where
    A: AuditTrail + ?Sized,
    R: BufRead,
    W: Write,
{
    if session.current_user().is_none() {
        return report::<(), _, _>(console, Err(MeterError::NotAuthenticated), |_| String::new());
    }

    let counter_input = answer!(console, console.prompt(COUNTER_PROMPT));
    let result = counter_input
        .parse::<CounterType>()
        .and_then(|counter_type| {
            session
                .history(counter_type)
                .map(|history| (counter_type, history))
        });

    report(console, result, |(counter_type, history)| {
        format_history(counter_type, &history).trim_end().to_string()
    })
}

fn audit_log<A, R, W>(session: &mut Session<'_, A>, console: &mut Console<R, W>) -> MeterResult<Step>
where
    A: AuditTrail + ?Sized,
    R: BufRead,
    W: Write,
{
    let result = session.audit_log(None);
    report(console, result, |entries| {
        format_audit_log(&entries).trim_end().to_string()
    })
}

//! Demo script exercising every student endpoint once, in order
//!
//! Each call prints its own section. A failed call prints
//! `An error occurred: ...` and the script moves on.

use std::fmt::Display;
use std::io::{self, Write};

use super::api::{ClientOutcome, StudentClient};
use crate::students::{Student, StudentInput};

const READ_SEPARATOR: &str = "--------------------------------";
const WRITE_SEPARATOR: &str = "_____________________________";

/// Run the full demo against `client`, writing the transcript to `out`
pub async fn run_demo<W: Write>(client: &StudentClient, out: &mut W) -> io::Result<()> {
    show_all(client, out).await?;
    show_passed(client, out).await?;
    show_average(client, out).await?;
    show_student(client, 3, out).await?;
    add_student(client, &StudentInput::new("Mohamed Mostafa", 44, 38), out).await?;
    delete_student(client, 4, out).await?;
    update_student(client, 2, &StudentInput::new("Salma", 22, 90), out).await?;
    Ok(())
}

fn header<W: Write>(out: &mut W, separator: &str, title: impl Display) -> io::Result<()> {
    writeln!(out, "\n{}", separator)?;
    writeln!(out, "\n{}\n", title)
}

fn write_student<W: Write>(out: &mut W, prefix: &str, s: &Student) -> io::Result<()> {
    writeln!(
        out,
        "{}ID: {}, Name: {}, Age: {}, Grade: {}",
        prefix, s.id, s.name, s.age, s.grade
    )
}

fn write_failure<W: Write>(out: &mut W, err: impl Display) -> io::Result<()> {
    writeln!(out, "An error occurred: {}", err)
}

async fn show_all<W: Write>(client: &StudentClient, out: &mut W) -> io::Result<()> {
    header(out, READ_SEPARATOR, "Fetching all students...")?;
    match client.all().await {
        Ok(ClientOutcome::Ok(students)) => {
            for s in &students {
                write_student(out, "", s)?;
            }
            Ok(())
        }
        // Collection reads treat any non-success status as a failed call.
        Ok(ClientOutcome::BadRequest(msg) | ClientOutcome::NotFound(msg)) => {
            write_failure(out, msg)
        }
        Err(e) => write_failure(out, e),
    }
}

async fn show_passed<W: Write>(client: &StudentClient, out: &mut W) -> io::Result<()> {
    header(out, READ_SEPARATOR, "Fetching Passed students...")?;
    match client.passed().await {
        Ok(ClientOutcome::Ok(students)) => {
            for s in &students {
                write_student(out, "", s)?;
            }
            Ok(())
        }
        Ok(ClientOutcome::BadRequest(msg) | ClientOutcome::NotFound(msg)) => {
            write_failure(out, msg)
        }
        Err(e) => write_failure(out, e),
    }
}

async fn show_average<W: Write>(client: &StudentClient, out: &mut W) -> io::Result<()> {
    header(out, READ_SEPARATOR, "Fetching Average Grades...")?;
    match client.average_grade().await {
        Ok(ClientOutcome::Ok(average)) => writeln!(out, "Average Grade: {}", average),
        Ok(ClientOutcome::BadRequest(msg) | ClientOutcome::NotFound(msg)) => {
            write_failure(out, msg)
        }
        Err(e) => write_failure(out, e),
    }
}

async fn show_student<W: Write>(client: &StudentClient, id: i64, out: &mut W) -> io::Result<()> {
    header(out, READ_SEPARATOR, format!("Fetching Student With Id: {}", id))?;
    match client.get(id).await {
        Ok(ClientOutcome::Ok(s)) => writeln!(
            out,
            "Name: {}, Age: {}, Grade: {}",
            s.name, s.age, s.grade
        ),
        Ok(ClientOutcome::NotFound(_)) => writeln!(out, "Student Not Found.."),
        Ok(ClientOutcome::BadRequest(msg)) => writeln!(out, "Bad Request: {}", msg),
        Err(e) => write_failure(out, e),
    }
}

async fn add_student<W: Write>(
    client: &StudentClient,
    input: &StudentInput,
    out: &mut W,
) -> io::Result<()> {
    header(out, WRITE_SEPARATOR, "Adding a new student...")?;
    match client.add(input).await {
        Ok(ClientOutcome::Ok(s)) => write_student(out, "Added Student - ", &s),
        Ok(ClientOutcome::BadRequest(_)) => writeln!(out, "Bad Request: Invalid student data."),
        Ok(ClientOutcome::NotFound(msg)) => writeln!(out, "Not Found: {}", msg),
        Err(e) => write_failure(out, e),
    }
}

async fn delete_student<W: Write>(client: &StudentClient, id: i64, out: &mut W) -> io::Result<()> {
    header(out, WRITE_SEPARATOR, format!("Deleting student with ID {}...", id))?;
    match client.delete(id).await {
        Ok(ClientOutcome::Ok(_)) => writeln!(out, "Student with ID {} has been deleted.", id),
        Ok(ClientOutcome::BadRequest(_)) => writeln!(out, "Bad Request: Not accepted ID {}", id),
        Ok(ClientOutcome::NotFound(_)) => {
            writeln!(out, "Not Found: Student with ID {} not found.", id)
        }
        Err(e) => write_failure(out, e),
    }
}

async fn update_student<W: Write>(
    client: &StudentClient,
    id: i64,
    input: &StudentInput,
    out: &mut W,
) -> io::Result<()> {
    header(out, WRITE_SEPARATOR, format!("Updating student with ID {}...", id))?;
    match client.update(id, input).await {
        Ok(ClientOutcome::Ok(s)) => write_student(out, "Updated Student: ", &s),
        Ok(ClientOutcome::BadRequest(_)) => {
            writeln!(out, "Failed to update student: Invalid data.")
        }
        Ok(ClientOutcome::NotFound(_)) => writeln!(out, "Student with ID {} not found.", id),
        Err(e) => write_failure(out, e),
    }
}

// Copyright 2026 The libpq-rs Authors
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::Parser;
use libpq::Connection;
use libpq::ConnectionConfig;
use libpq::FromText;
use libpq::Oid;
use libpq::QueryResult;
use libpq::Tuples;
use log::info;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(version, about = "Dump the first row of some tables and run a lookup")]
struct Args {
    /// libpq connection string or postgresql:// URI.
    #[arg(
        long,
        default_value = "host=localhost port=5432 dbname=postgres connect_timeout=10"
    )]
    conninfo: String,

    /// JSON connection config; takes precedence over --conninfo.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tables to sample. May be given more than once.
    #[arg(long = "table")]
    tables: Vec<String>,

    /// Table searched by the parameterized lookup.
    #[arg(long, default_value = "users")]
    lookup_table: String,

    #[arg(long, default_value = "github_login")]
    lookup_column: String,

    /// Value bound to $1 in the lookup. The lookup is skipped without it.
    #[arg(long)]
    lookup_value: Option<String>,

    /// Print rows as JSON objects.
    #[arg(long)]
    json: bool,
}

fn print_tuples(tuples: &Tuples, json: bool) -> anyhow::Result<()> {
    if !json {
        println!("{}", tuples);
        return Ok(());
    }

    for row in tuples {
        println!("{}", row.to_json()?);
    }
    Ok(())
}

fn sample_tables(conn: &Connection, tables: &[String], json: bool) -> anyhow::Result<()> {
    for table in tables {
        let sql = format!("select * from {} limit 1", conn.escape_identifier(table)?);
        match conn.execute(&sql, &[])? {
            QueryResult::Tuples(tuples) => print_tuples(&tuples, json)?,
            QueryResult::Ok => println!("{}: no rows returned", table),
        }
    }
    Ok(())
}

fn lookup(conn: &Connection, args: &Args, value: &str) -> anyhow::Result<()> {
    let sql = format!(
        "select * from {} where {}=$1 limit 1",
        conn.escape_identifier(&args.lookup_table)?,
        conn.escape_identifier(&args.lookup_column)?
    );
    let result = conn.execute(&sql, &[&value])?;
    let tuples = result
        .tuples()
        .context("lookup did not return a result set")?;

    for row in tuples {
        if args.json {
            println!("{}", row.to_json()?);
            continue;
        }

        for column in 0..row.len() {
            let info = row.info(column)?;
            match (info.oid, info.value) {
                (Some(Oid::Timestamp), Some(value)) => {
                    println!("{}: {}", info.name, NaiveDateTime::from_text(value)?)
                }
                (Some(Oid::Uuid), Some(value)) => {
                    println!("{}: {}", info.name, Uuid::from_text(value)?)
                }
                _ => println!("{:?}", info),
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let conn = match &args.config {
        Some(path) => {
            let config = ConnectionConfig::from_file(path)?;
            Connection::from_config(&config)?
        }
        None => Connection::connect(&args.conninfo)?,
    };
    info!("connected, server version {}", conn.server_version()?);

    sample_tables(&conn, &args.tables, args.json)?;

    if let Some(value) = &args.lookup_value {
        lookup(&conn, &args, value)?;
    }

    Ok(())
}

use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::Degradation;
use crate::parser::Extraction;

pub fn connect(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS regions (
            id         INTEGER PRIMARY KEY,
            name       TEXT UNIQUE NOT NULL,
            position   INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS domains (
            id             INTEGER PRIMARY KEY,
            region_id      INTEGER NOT NULL REFERENCES regions(id),
            position       INTEGER NOT NULL,
            name           TEXT NOT NULL,
            description    TEXT NOT NULL,
            embedding_text TEXT NOT NULL,
            tier           TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_domains_region ON domains(region_id);

        CREATE TABLE IF NOT EXISTS domain_codes (
            domain_id  INTEGER NOT NULL REFERENCES domains(id),
            position   INTEGER NOT NULL,
            code       TEXT NOT NULL CHECK(length(code) = 2),
            PRIMARY KEY (domain_id, code)
        );

        CREATE TABLE IF NOT EXISTS emerging_domains (
            id         INTEGER PRIMARY KEY,
            region_id  INTEGER NOT NULL REFERENCES regions(id),
            position   INTEGER NOT NULL,
            label      TEXT NOT NULL
        );

        -- Diagnostics, appended per run
        CREATE TABLE IF NOT EXISTS degradations (
            id         INTEGER PRIMARY KEY,
            run_id     TEXT NOT NULL,
            kind       TEXT NOT NULL,
            region     TEXT NOT NULL,
            detail     TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        CREATE INDEX IF NOT EXISTS idx_degradations_run ON degradations(run_id);
        ",
    )
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SaveCounts {
    pub regions: usize,
    pub domains: usize,
    pub codes: usize,
    pub emerging: usize,
}

/// Replace the stored catalog with `extraction`, in one transaction.
pub fn save_extraction(conn: &mut Connection, extraction: &Extraction) -> rusqlite::Result<SaveCounts> {
    let tx = conn.transaction()?;
    tx.execute_batch(
        "
        DELETE FROM domain_codes;
        DELETE FROM domains;
        DELETE FROM emerging_domains;
        DELETE FROM regions;
        ",
    )?;

    let mut counts = SaveCounts::default();
    {
        let mut region_stmt = tx.prepare("INSERT INTO regions (name, position) VALUES (?1, ?2)")?;
        let mut domain_stmt = tx.prepare(
            "INSERT INTO domains (region_id, position, name, description, embedding_text, tier)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        let mut code_stmt =
            tx.prepare("INSERT INTO domain_codes (domain_id, position, code) VALUES (?1, ?2, ?3)")?;
        let mut emerging_stmt =
            tx.prepare("INSERT INTO emerging_domains (region_id, position, label) VALUES (?1, ?2, ?3)")?;

        for (position, outcome) in extraction.regions.iter().enumerate() {
            region_stmt.execute(params![outcome.region.name(), position])?;
            let region_id = tx.last_insert_rowid();
            counts.regions += 1;

            for (position, record) in outcome.domains.iter().enumerate() {
                domain_stmt.execute(params![
                    region_id,
                    position,
                    record.name,
                    record.description,
                    record.embedding_text,
                    record.tier,
                ])?;
                let domain_id = tx.last_insert_rowid();
                counts.domains += 1;

                for (position, code) in record.codes.iter().enumerate() {
                    code_stmt.execute(params![domain_id, position, code])?;
                    counts.codes += 1;
                }
            }

            for (position, label) in outcome.emerging.iter().enumerate() {
                emerging_stmt.execute(params![region_id, position, label])?;
                counts.emerging += 1;
            }
        }
    }

    tx.commit()?;
    Ok(counts)
}

pub fn insert_degradation(conn: &Connection, run_id: &str, degradation: &Degradation) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO degradations (run_id, kind, region, detail) VALUES (?1, ?2, ?3, ?4)",
        params![
            run_id,
            degradation.kind(),
            degradation.region().name(),
            degradation.to_string()
        ],
    )?;
    Ok(())
}

// ── Tests ──

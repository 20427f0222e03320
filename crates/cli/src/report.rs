// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands report writer.
use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::io::{self, BufRead, Write};

use pokerhands_eval::{Classification, Hand, HandRank, par_classify};

/// Report options.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Write JSON records instead of text lines.
    pub json: bool,
    /// Number of classification tasks.
    pub tasks: usize,
    /// Write the hand ranks counts after the hands.
    pub summary: bool,
}

/// A JSON report record.
#[derive(Debug, Serialize)]
struct Record<'a> {
    hand: &'a str,
    description: String,
    #[serde(flatten)]
    classification: &'a Classification,
}

/// Number of hands per hand rank.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    counts: [usize; HandRank::COUNT],
}

impl Summary {
    fn add(&mut self, rank: HandRank) {
        self.counts[rank as usize] += 1;
    }

    /// The number of hands with the given rank.
    pub fn count(&self, rank: HandRank) -> usize {
        self.counts[rank as usize]
    }

    /// The total number of hands.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer)?;
        writeln!(writer, "Total hands      {}", self.total())?;
        for rank in HandRank::ranks() {
            let label = format!("{rank}:");
            writeln!(writer, "{label:<17}{}", self.count(rank))?;
        }

        Ok(())
    }
}

/// Reads one hand per line and writes each line with its best hand.
pub fn write_report<R, W>(reader: R, mut writer: W, opts: Options) -> Result<Summary>
where
    R: BufRead,
    W: Write,
{
    // Lines that are not UTF-8 are kept, their garbage tokens are dropped
    // when parsing the hand.
    let lines = reader
        .split(b'\n')
        .map(|line| -> io::Result<String> {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }

            Ok(String::from_utf8_lossy(&line).into_owned())
        })
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read hands")?;

    let hands = lines.iter().map(|l| Hand::parse(l)).collect::<Vec<_>>();
    let results = par_classify(opts.tasks, &hands);
    info!("Classified {} hands with {} tasks", hands.len(), opts.tasks);

    let mut summary = Summary::default();
    for (line, classification) in lines.iter().zip(&results) {
        summary.add(classification.rank());

        if opts.json {
            let record = Record {
                hand: line,
                description: classification.to_string(),
                classification,
            };
            serde_json::to_writer(&mut writer, &record)?;
            writeln!(writer)?;
        } else {
            writeln!(writer, "{line} - {classification}")?;
        }
    }

    if opts.summary {
        summary.write(&mut writer)?;
    }

    writer.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3s 2h Ad 4c 5c
2h 3h 4h 5h 6h
Qh Jh Kh 10h Ah
8s 2h 7d 10c 3s
8s 2h 8d 4c 4s
4c 4s Ah Ac 4d
8s 2h 7d 11c 3s
As Ah Ac 4c 4d
As Ah Ac 4c 5c
Ad 2d 3d 4d 5d
8s 2h 7d 3s
10s Js Qs Kc As
";

    const TEXT: Options = Options {
        json: false,
        tasks: 1,
        summary: false,
    };

    fn report(input: &str, opts: Options) -> (String, Summary) {
        let mut out = Vec::new();
        let summary = write_report(input.as_bytes(), &mut out, opts).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn text_report() {
        let (out, summary) = report(SAMPLE, TEXT);
        let expected = "3s 2h Ad 4c 5c - Straight to Five
2h 3h 4h 5h 6h - Straight Flush (Hearts) to Six
Qh Jh Kh 10h Ah - Royal Flush! (Hearts)
8s 2h 7d 10c 3s - High Card: Ten
8s 2h 8d 4c 4s - Two Pair: Eights over Fours
4c 4s Ah Ac 4d - Full House: Fours full of Aces
8s 2h 7d 11c 3s - Invalid Hand
As Ah Ac 4c 4d - Full House: Aces full of Fours
As Ah Ac 4c 5c - Three of a Kind: Aces
Ad 2d 3d 4d 5d - Straight Flush (Diamonds) to Five
8s 2h 7d 3s - Invalid Hand
10s Js Qs Kc As - Straight to Ace
";
        assert_eq!(out, expected);
        assert_eq!(summary.total(), 12);
        assert_eq!(summary.count(HandRank::InvalidHand), 2);
        assert_eq!(summary.count(HandRank::StraightFlush), 3);
        assert_eq!(summary.count(HandRank::FullHouse), 2);
    }

    #[test]
    fn parallel_report_matches() {
        let (expected, _) = report(SAMPLE, TEXT);
        for tasks in [2, 5, 32] {
            let (out, _) = report(SAMPLE, Options { tasks, ..TEXT });
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn json_report() {
        let opts = Options { json: true, ..TEXT };
        let (out, _) = report("4c 4s Ah Ac 4d\nAh 2h 9h Jh 4h\n8s 2h 7d 3s\n", opts);
        let records = out
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap())
            .collect::<Vec<_>>();

        assert_eq!(records.len(), 3);

        assert_eq!(records[0]["hand"], "4c 4s Ah Ac 4d");
        assert_eq!(records[0]["description"], "Full House: Fours full of Aces");
        assert_eq!(records[0]["rank"], "FullHouse");
        assert_eq!(records[0]["primary"], "Four");
        assert_eq!(records[0]["secondary"], "Ace");
        assert!(records[0]["suit"].is_null());

        assert_eq!(records[1]["rank"], "Flush");
        assert_eq!(records[1]["suit"], "Hearts");
        assert!(records[1]["primary"].is_null());

        assert_eq!(records[2]["rank"], "InvalidHand");
    }

    #[test]
    fn summary_report() {
        let opts = Options {
            summary: true,
            ..TEXT
        };
        let (out, _) = report("3s 2h Ad 4c 5c\n8s 2h 7d 3s\n", opts);
        assert!(out.contains("Total hands      2\n"));
        assert!(out.contains("Invalid Hand:    1\n"));
        assert!(out.contains("Straight:        1\n"));
        assert!(out.contains("Straight Flush:  0\n"));
    }

    #[test]
    fn non_utf8_line() {
        let mut out = Vec::new();
        let input: &[u8] = b"3s 2h Ad 4c 5c\n\xff\xfe 2h\r\n2h 3h 4h 5h 6h\n";
        let summary = write_report(input, &mut out, TEXT).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "3s 2h Ad 4c 5c - Straight to Five");
        assert!(lines[1].ends_with(" - Invalid Hand"), "{}", lines[1]);
        assert_eq!(lines[2], "2h 3h 4h 5h 6h - Straight Flush (Hearts) to Six");
        assert_eq!(summary.count(HandRank::InvalidHand), 1);
    }

    #[test]
    fn crlf_lines() {
        let (out, _) = report("8s 2h 8d 4c 4s\r\nAh 2h 9h Jh 4h\r\n", TEXT);
        assert_eq!(
            out,
            "8s 2h 8d 4c 4s - Two Pair: Eights over Fours\nAh 2h 9h Jh 4h - Flush: Hearts\n"
        );
    }

    #[test]
    fn empty_input() {
        let (out, summary) = report("", TEXT);
        assert!(out.is_empty());
        assert_eq!(summary, Summary::default());
    }
}

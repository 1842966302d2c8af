use std::io;
use std::io::BufRead;
use std::io::Write;

use dense_dijkstra::AdjacencyMatrix;
use dense_dijkstra::PathResult;
use dense_dijkstra::shortest_path;
use log::debug;

const START_PROMPT: &str = "Enter a starting vertex ('q' to quit): ";
const DEST_PROMPT: &str = "Enter a destination vertex ('q' to quit): ";

/// One line of user input, classified.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Reply {
    Quit,
    Number(i64),
    Garbage,
}

/// Interactive query loop over 1-based vertex numbers.
pub struct Session<'g, R, W> {
    graph: &'g AdjacencyMatrix,
    input: R,
    output: W,
}

impl<'g, R: BufRead, W: Write> Session<'g, R, W> {
    pub fn new(graph: &'g AdjacencyMatrix, input: R, output: W) -> Self {
        Self {
            graph,
            input,
            output,
        }
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            // An empty start line ends the session as well.
            let start = match self.prompt(START_PROMPT)? {
                Some(line) if !line.is_empty() => classify(&line),
                _ => return Ok(()),
            };
            if start == Reply::Quit {
                return Ok(());
            }

            let dest = match self.prompt(DEST_PROMPT)? {
                Some(line) => classify(&line),
                None => return Ok(()),
            };
            if dest == Reply::Quit {
                return Ok(());
            }

            let (Reply::Number(start), Reply::Number(dest)) = (start, dest) else {
                debug!("ignoring non-numeric query {start:?} -> {dest:?}");
                continue;
            };
            self.answer(start, dest)?;
        }
    }

    fn answer(&mut self, start: i64, dest: i64) -> io::Result<()> {
        let (Some(s), Some(d)) = (self.to_index(start), self.to_index(dest)) else {
            return writeln!(self.output, "Invalid indices: {start}, {dest}");
        };
        let result = shortest_path(self.graph, s, d);
        write_result(&mut self.output, s, d, &result)
    }

    fn to_index(&self, number: i64) -> Option<usize> {
        let idx = usize::try_from(number).ok()?.checked_sub(1)?;
        self.graph.contains(idx).then_some(idx)
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(Some(trimmed.to_owned()))
    }
}

fn classify(line: &str) -> Reply {
    if line.starts_with(['q', 'Q']) {
        return Reply::Quit;
    }
    line.trim().parse().map_or(Reply::Garbage, Reply::Number)
}

/// Prints one answer in the interactive layout; indices are 0-based.
pub fn write_result<W: Write>(
    out: &mut W,
    start: usize,
    dest: usize,
    result: &PathResult,
) -> io::Result<()> {
    writeln!(out)?;
    if result.is_reachable() {
        writeln!(
            out,
            "The shortest path from {} to {} is length {}",
            start + 1,
            dest + 1,
            result.cost
        )?;
        writeln!(out, "\t{}", result.labels())?;
    } else {
        writeln!(out, "There is no path from {} to {}", start + 1, dest + 1)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use dense_dijkstra::AdjacencyMatrix;
    use dense_dijkstra::demo_graph;

    use super::{Reply, Session, classify};

    fn run(graph: &AdjacencyMatrix, input: &str) -> String {
        let mut out = Vec::new();
        Session::new(graph, input.as_bytes(), &mut out).run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn classify_lines() {
        assert_eq!(classify("q"), Reply::Quit);
        assert_eq!(classify("Quit"), Reply::Quit);
        assert_eq!(classify(" 3 "), Reply::Number(3));
        assert_eq!(classify("-2"), Reply::Number(-2));
        assert_eq!(classify("three"), Reply::Garbage);
        assert_eq!(classify(""), Reply::Garbage);
    }

    #[test]
    fn answers_demo_query() {
        let out = run(&demo_graph(), "1\n6\nq\n");
        assert!(out.contains("The shortest path from 1 to 6 is length 12\n"));
        assert!(out.contains("\tv1->v4->v5->v2->v3->v6\n\n"));
        assert!(out.ends_with("Enter a starting vertex ('q' to quit): "));
    }

    #[test]
    fn same_vertex_query() {
        let out = run(&demo_graph(), "3\n3\n");
        assert!(out.contains("The shortest path from 3 to 3 is length 0\n\tv3\n"));
    }

    #[test]
    fn garbage_is_ignored_and_range_is_checked() {
        let out = run(&demo_graph(), "x\n2\n0\n7\n2\n\n1\n2\nQ\n");
        assert_eq!(out.matches("Invalid indices").count(), 1);
        assert!(out.contains("Invalid indices: 0, 7\n"));
        assert!(out.contains("The shortest path from 1 to 2 is length 6\n\tv1->v4->v5->v2\n"));
        assert!(!out.contains("from 2"));
    }

    #[test]
    fn quits_on_destination_q_and_empty_start() {
        let out = run(&demo_graph(), "1\nq\n1\n2\n");
        assert!(!out.contains("shortest path"));
        let out = run(&demo_graph(), "\n1\n2\n");
        assert_eq!(out, "Enter a starting vertex ('q' to quit): ");
    }

    #[test]
    fn reports_unreachable() {
        let g = AdjacencyMatrix::from_undirected_edges(3, &[(0, 1, 4)]);
        let out = run(&g, "1\n3\n");
        assert!(out.contains("\nThere is no path from 1 to 3\n\n"));
    }
}

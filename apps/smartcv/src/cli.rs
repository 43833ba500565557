//! Interactive terminal menu.
//!
//! Generic over `BufRead`/`Write` so tests can script a whole session. Bad
//! input re-prompts; end of input ends the session like "Exit".

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;

use crate::models::job::{DegreeRequirement, ExperienceRange, JobDescription};
use crate::report::{write_candidates, write_detailed_report, write_ranking, AnalysisReport};
use crate::state::AppState;

const MENU: &str = "\nSearch Options:
1. Search by Skills
2. Search by Minimum Experience
3. Search by Education Level
4. View All Candidates
5. Exit
6. Detailed Job Match";

const INVALID_OPTION: &str = "Invalid option! Please choose a valid option.";

enum Flow {
    Continue,
    Exit,
}

pub struct Session<'a, R, W> {
    state: &'a AppState,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(state: &'a AppState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    pub async fn run(mut self) -> Result<()> {
        writeln!(self.output, "\n=== Smart CV Analyzer ===")?;
        writeln!(
            self.output,
            "Candidate Library: {} profiles loaded",
            self.state.library.len()
        )?;

        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Select option: ")? else {
                break;
            };

            let flow = match line.trim().parse::<u32>() {
                Ok(1) => self.search_by_skills().await?,
                Ok(2) => self.search_by_experience().await?,
                Ok(3) => self.search_by_education().await?,
                Ok(4) => {
                    write_candidates(&mut self.output, &self.state.library)?;
                    Flow::Continue
                }
                Ok(5) => Flow::Exit,
                Ok(6) => self.detailed_job_match().await?,
                _ => {
                    writeln!(self.output, "{INVALID_OPTION}")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        info!("Exiting application");
        Ok(())
    }

    async fn search_by_skills(&mut self) -> Result<Flow> {
        let Some(line) = self.prompt("\nEnter required skills (comma separated): ")? else {
            return Ok(Flow::Exit);
        };
        let skills = split_skills(&line);
        if skills.is_empty() {
            writeln!(self.output, "Please enter at least one skill.")?;
            return Ok(Flow::Continue);
        }

        let job = JobDescription::new(
            "Custom Search",
            skills,
            ExperienceRange::at_least(0),
            vec![],
        )?;
        self.rank_and_print(&job).await?;
        Ok(Flow::Continue)
    }

    async fn search_by_experience(&mut self) -> Result<Flow> {
        let Some(years) = self.prompt_number("\nEnter minimum years of experience: ")? else {
            return Ok(Flow::Exit);
        };

        let job = JobDescription::new(
            "Experience Search",
            Vec::<String>::new(),
            ExperienceRange::at_least(years),
            vec![],
        )?;
        self.rank_and_print(&job).await?;
        Ok(Flow::Continue)
    }

    async fn search_by_education(&mut self) -> Result<Flow> {
        let Some(degree) =
            self.prompt("\nEnter required degree level (e.g. Bachelor's, Master's): ")?
        else {
            return Ok(Flow::Exit);
        };
        if degree.trim().is_empty() {
            writeln!(self.output, "Please enter a degree level.")?;
            return Ok(Flow::Continue);
        }

        let job = JobDescription::new(
            "Education Search",
            Vec::<String>::new(),
            ExperienceRange::at_least(0),
            vec![DegreeRequirement::new(degree, "")],
        )?;
        self.rank_and_print(&job).await?;
        Ok(Flow::Continue)
    }

    async fn detailed_job_match(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt("\nJob title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(skills) = self.prompt("Required skills (comma separated): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(min_years) = self.prompt_number("Minimum years of experience: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(max_years) = self.prompt_optional_number("Maximum years (blank for none): ")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(degree) = self.prompt("Required degree (blank for none): ")? else {
            return Ok(Flow::Exit);
        };

        let education = if degree.trim().is_empty() {
            vec![]
        } else {
            vec![DegreeRequirement::new(degree, "")]
        };

        let job = ExperienceRange::new(min_years, max_years).and_then(|range| {
            JobDescription::new(&title, split_skills(&skills), range, education)
        });
        let job = match job {
            Ok(job) => job,
            Err(e) => {
                writeln!(self.output, "{e}")?;
                return Ok(Flow::Continue);
            }
        };

        let matches = self
            .state
            .matcher
            .analyze_and_rank(self.state.library.candidates(), &job)
            .await;
        let report = AnalysisReport::build(&matches, &job);
        write_detailed_report(&mut self.output, &report)?;
        Ok(Flow::Continue)
    }

    async fn rank_and_print(&mut self, job: &JobDescription) -> Result<()> {
        info!("Running '{}'", job.title());
        let matches = self
            .state
            .matcher
            .analyze_and_rank(self.state.library.candidates(), job)
            .await;
        write_ranking(&mut self.output, &matches)?;
        Ok(())
    }

    /// Prints `prompt` and reads one line. `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_number(&mut self, prompt: &str) -> io::Result<Option<u32>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<u32>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }

    /// Like `prompt_number`, but a blank line is `Some(None)`.
    fn prompt_optional_number(&mut self, prompt: &str) -> io::Result<Option<Option<u32>>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            let line = line.trim();
            if line.is_empty() {
                return Ok(Some(None));
            }
            match line.parse::<u32>() {
                Ok(n) => return Ok(Some(Some(n))),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }
}

fn split_skills(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    async fn run_session(input: &str) -> String {
        let state = test_state();
        let mut output = Vec::new();
        Session::new(&state, input.as_bytes(), &mut output)
            .run()
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_banner_and_exit() {
        let out = run_session("5\n").await;
        assert!(out.contains("=== Smart CV Analyzer ==="));
        assert!(out.contains("Candidate Library: 10 profiles loaded"));
        assert!(out.contains("5. Exit"));
        assert_eq!(out.matches("Select option: ").count(), 1);
    }

    #[tokio::test]
    async fn test_eof_ends_session() {
        let out = run_session("").await;
        assert!(out.contains("Select option: "));
    }

    #[tokio::test]
    async fn test_invalid_options_reprompt() {
        let out = run_session("9\nabc\n5\n").await;
        assert_eq!(out.matches(INVALID_OPTION).count(), 2);
        assert_eq!(out.matches("Select option: ").count(), 3);
    }

    #[tokio::test]
    async fn test_skill_search_ranks_matching_candidate_first() {
        let out = run_session("1\nGo, Docker, Kubernetes\n5\n").await;
        assert!(out.contains("=== Ranking Results ==="));
        let first_row = out
            .lines()
            .skip_while(|l| !l.starts_with("Name"))
            .nth(2)
            .unwrap();
        assert!(first_row.starts_with("Mia Wilson"), "got {first_row:?}");
    }

    #[tokio::test]
    async fn test_blank_skill_search_is_rejected() {
        let out = run_session("1\n , \n5\n").await;
        assert!(out.contains("Please enter at least one skill."));
        assert!(!out.contains("=== Ranking Results ==="));
    }

    #[tokio::test]
    async fn test_experience_search_reprompts_on_bad_number() {
        let out = run_session("2\nfive\n3\n5\n").await;
        assert!(out.contains("Please enter a whole number."));
        assert!(out.contains("=== Ranking Results ==="));
    }

    #[tokio::test]
    async fn test_education_search_prints_ranking() {
        let out = run_session("3\nMaster's\n5\n").await;
        assert!(out.contains("=== Ranking Results ==="));
        assert_eq!(out.matches("   Education: ").count(), 10);
    }

    #[tokio::test]
    async fn test_view_all_candidates() {
        let out = run_session("4\n5\n").await;
        assert!(out.contains("=== All Candidates ==="));
        assert_eq!(out.matches("\nName: ").count(), 10);
    }

    #[tokio::test]
    async fn test_detailed_job_match() {
        let out = run_session("6\nJava Developer\nJava, SQL\n2\n\nBachelor's\n5\n").await;
        assert!(out.contains("=== Detailed Analysis Report ==="));
        assert!(out.contains("Job Title: Java Developer"));
        assert!(out.contains("Required Experience: 2+ years"));
        assert!(out.contains("1. John Smith"));
    }

    #[tokio::test]
    async fn test_detailed_job_match_rejects_inverted_range() {
        let out = run_session("6\nJava Developer\nJava\n5\n2\n\n5\n").await;
        assert!(out.contains("Invalid experience range"));
        assert!(!out.contains("=== Detailed Analysis Report ==="));
    }

    #[test]
    fn test_split_skills() {
        assert_eq!(
            split_skills(" Java ,SQL,, Node.js "),
            vec!["java".to_string(), "sql".to_string(), "node.js".to_string()]
        );
        assert!(split_skills("  ").is_empty());
    }
}

use anyhow::{Context, Result};
use seedgen_core::{canonicalize, generate, Generator, Limits, SeedSource, SeededRng};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Result of one generator run, with everything needed to replay it.
#[derive(Clone, Debug, Serialize)]
pub struct Report<T> {
    pub generator: &'static str,
    pub seed: String,
    pub reproducible: bool,
    pub params: String,
    pub output: T,
}

/// `key=value` rendering of a generator's output.
pub trait OutputLines {
    fn lines(&self) -> Vec<String>;
}

impl OutputLines for Vec<i64> {
    fn lines(&self) -> Vec<String> {
        let values: Vec<String> = self.iter().map(i64::to_string).collect();
        vec![format!("values={}", values.join(","))]
    }
}

impl OutputLines for Vec<String> {
    fn lines(&self) -> Vec<String> {
        vec![format!("picks={}", self.join(","))]
    }
}

impl OutputLines for Vec<Vec<String>> {
    fn lines(&self) -> Vec<String> {
        self.iter()
            .enumerate()
            .map(|(idx, team)| format!("team_{}={}", idx + 1, team.join(",")))
            .collect()
    }
}

impl<T: OutputLines> Report<T> {
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("generator={}", self.generator),
            format!("seed={}", self.seed),
            format!("reproducible={}", self.reproducible),
            format!("params={}", self.params),
        ];
        lines.extend(self.output.lines());
        lines
    }
}

pub fn run_generator<G>(
    name: &'static str,
    generator: &G,
    base: Option<&str>,
    limits: &Limits,
) -> Result<Report<G::Output>>
where
    G: Generator,
{
    let params = canonicalize(&generator.params());
    tracing::debug!(generator = name, params = %params, "running generator");

    let generation = generate(generator, base, limits)
        .with_context(|| format!("{name} generator rejected its options"))?;

    let reproducible = generation.seed.is_reproducible();
    if !reproducible {
        tracing::warn!(
            generator = name,
            "no --seed given; result uses an ephemeral seed and cannot be replayed from options"
        );
    }
    tracing::info!(generator = name, seed = %generation.seed, reproducible, "generated");

    Ok(Report {
        generator: name,
        seed: generation.seed.into_string(),
        reproducible,
        params,
        output: generation.output,
    })
}

#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Draw {
    Float(f64),
    Int(i64),
}

#[derive(Clone, Debug, Serialize)]
pub struct StreamReport {
    pub seed: String,
    pub reproducible: bool,
    pub hash: u32,
    pub draws: Vec<Draw>,
}

/// First `count` draws of `seed`'s stream, as floats or as integers in
/// `int_range`.
pub fn dump_stream(seed: &SeedSource, count: usize, int_range: Option<(i64, i64)>) -> StreamReport {
    let mut rng: SeededRng = seed.rng();
    let hash = rng.state();
    let draws = (0..count)
        .map(|_| match int_range {
            Some((min, max)) => Draw::Int(rng.next_int(min, max)),
            None => Draw::Float(rng.next_f64()),
        })
        .collect();

    StreamReport {
        seed: seed.as_str().to_string(),
        reproducible: seed.is_reproducible(),
        hash,
        draws,
    }
}

pub fn write_report<T: Serialize>(path: &Path, report: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed creating directory {}", parent.display()))?;
        }
    }
    let json = serde_json::to_vec_pretty(report).context("failed to serialize report json")?;
    fs::write(path, json).with_context(|| format!("failed writing {}", path.display()))
}

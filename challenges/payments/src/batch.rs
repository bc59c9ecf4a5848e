use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{error, info};
use tokio::sync::Semaphore;
use tokio::task;

use crate::app;
use crate::config::DriverConfig;
use crate::error::PaymentError;
use crate::memo::Outcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl BatchJob {
    /// The output is `<stem>.out`, written to `out_dir` or next to the input.
    pub fn new(input: &Path, out_dir: Option<&Path>) -> BatchJob {
        let name = Path::new(input.file_stem().unwrap_or(input.as_os_str())).with_extension("out");
        let output = match out_dir {
            Some(dir) => dir.join(name),
            None => input.with_file_name(name),
        };
        BatchJob {
            input: input.to_path_buf(),
            output,
        }
    }
}

#[derive(Debug)]
pub struct BatchResult {
    pub job: BatchJob,
    pub outcome: Result<Outcome, PaymentError>,
}

/// Solves every job on the blocking pool, at most `concurrency` at a time.
///
/// Each job gets its own search and memo table. A failing job is reported in
/// its result and doesn't stop the others. Results keep the order of `jobs`.
pub async fn run_batch(
    jobs: Vec<BatchJob>,
    config: DriverConfig,
    concurrency: usize,
) -> Result<Vec<BatchResult>, PaymentError> {
    info!("running {} jobs, {} at a time", jobs.len(), concurrency.max(1));
    let permits = Arc::new(Semaphore::new(concurrency.max(1)));

    let mut running = Vec::with_capacity(jobs.len());
    for job in jobs {
        // wait here rather than in the task so no more than `concurrency`
        // blocking threads are ever asked for.
        let permit = permits.clone().acquire_owned().await?;
        let (input, output) = (job.input.clone(), job.output.clone());
        let handle = task::spawn_blocking(move || {
            let _permit = permit;
            app::solve_file(&input, &output, &config)
        });
        running.push((job, handle));
    }

    let mut results = Vec::with_capacity(running.len());
    for (job, handle) in running {
        let outcome = handle.await.unwrap_or_else(|err| Err(err.into()));
        if let Err(err) = &outcome {
            error!("{}: {}", job.input.display(), err);
        }
        results.push(BatchResult { job, outcome });
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::amount::Amount;

    #[test]
    fn test_job_output_path() {
        let job = BatchJob::new(Path::new("data/march.txt"), None);
        assert_eq!(PathBuf::from("data/march.out"), job.output);

        let job = BatchJob::new(Path::new("data/march.txt"), Some(Path::new("results")));
        assert_eq!(PathBuf::from("results/march.out"), job.output);

        let job = BatchJob::new(Path::new("april"), None);
        assert_eq!(PathBuf::from("april.out"), job.output);
    }

    #[tokio::test]
    async fn test_run_batch() -> Result<(), PaymentError> {
        let dir = tempfile::tempdir().unwrap();
        let inputs = [
            ("found.txt", "74.06\n22.75\n59.33\n34.22\n27.21\n17.09\n100.99\n"),
            ("none.txt", "74.06\n22.75\n59.33\n34.23\n27.21\n17.09\n100.99\n"),
            ("broken.txt", "74.06\nseventeen\n"),
            ("zero.txt", "0.00\n22.75\n59.33\n"),
        ];
        let mut jobs = Vec::new();
        for (name, text) in inputs {
            let path = dir.path().join(name);
            fs::write(&path, text).unwrap();
            jobs.push(BatchJob::new(&path, None));
        }

        let results = run_batch(jobs, DriverConfig::default(), 2).await?;
        assert_eq!(4, results.len());

        let found = results[0].outcome.as_ref().unwrap().as_ref().unwrap();
        assert_eq!(Amount::from_cents(7406), found.iter().sum::<Amount>());
        assert_eq!(3, fs::read_to_string(dir.path().join("found.out")).unwrap().lines().count());

        assert!(results[1].outcome.as_ref().unwrap().is_none());
        assert_eq!("NO SOLUTION\n", fs::read_to_string(dir.path().join("none.out")).unwrap());

        assert!(matches!(results[2].outcome, Err(PaymentError::Parse { line: 2, .. })));
        assert!(!dir.path().join("broken.out").exists());

        assert_eq!(&Some(vec![]), results[3].outcome.as_ref().unwrap());
        assert_eq!("", fs::read_to_string(dir.path().join("zero.out")).unwrap());
        Ok(())
    }

    #[tokio::test]
    async fn test_run_batch_empty() -> Result<(), PaymentError> {
        let results = run_batch(vec![], DriverConfig::default(), 0).await?;
        assert!(results.is_empty());
        Ok(())
    }
}

use crossbeam_channel::TryRecvError;
use itertools::Itertools;
use log::trace;
use std::thread;

/// Apply `f` to every item on a pool of worker threads.
///
/// Results are returned in the order of `items`, after all workers are done.
pub fn map_parallel<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    let (s1, r1) = crossbeam_channel::unbounded();
    for job in 0..items.len() {
        s1.send(job).unwrap();
    }
    drop(s1);
    let nthreads = num_cpus::get().min(items.len()).max(1);
    trace!(target: "songlex", "{} jobs, {nthreads} threads", items.len());
    let mut results = Vec::with_capacity(items.len());
    thread::scope(|scope| {
        let (s2, r2) = crossbeam_channel::unbounded();
        for _ in 0..nthreads {
            let r1 = r1.clone();
            let s2 = s2.clone();
            let f = &f;
            scope.spawn(move || {
                let mut thread_results = vec![];
                loop {
                    match r1.try_recv() {
                        Ok(job) => thread_results.push((job, f(&items[job]))),
                        Err(TryRecvError::Empty) => unreachable!(),
                        Err(TryRecvError::Disconnected) => break,
                    }
                }
                s2.send(thread_results).unwrap();
            });
        }
        drop(s2);
        while let Ok(thread_results) = r2.recv() {
            results.extend(thread_results);
        }
    });
    results
        .into_iter()
        .sorted_by_key(|(job, _)| *job)
        .map(|(_, r)| r)
        .collect_vec()
}

use approx::assert_abs_diff_eq;

use cyclic_lr::{
    ScheduleErr, Scheduler,
    composer::OneCyclePolicy,
    optim::ParamGroup,
    scheduler::{CyclicScheduler, LrRangeFinder, OneCycleScheduler},
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn one_cycle_runs_to_the_end() -> anyhow::Result<()> {
    init_logger();

    const GROUPS: usize = 3;

    let policy = OneCyclePolicy {
        num_batches: 200,
        annihilation_batches: 20,
        annihilation_divisor: 100.,
        max_lr: 1.,
        min_lr: 0.1,
        max_momentum: 0.99,
        min_momentum: 0.7,
    };

    let mut scheduler = OneCycleScheduler::new(policy)?;
    let mut optimizer = vec![ParamGroup::new(0., 0.); GROUPS];

    let mut peak_lr = (0, f32::MIN);
    let mut trough_momentum = (0, f32::MAX);

    for step in 0..scheduler.len() {
        let value = scheduler.apply(&mut optimizer)?;

        if value.learning_rate > peak_lr.1 {
            peak_lr = (step, value.learning_rate);
        }
        if value.momentum < trough_momentum.1 {
            trough_momentum = (step, value.momentum);
        }
    }

    assert_eq!(peak_lr.0, trough_momentum.0);
    assert_abs_diff_eq!(peak_lr.1, 1., epsilon = 1e-6);
    assert_abs_diff_eq!(trough_momentum.1, 0.7, epsilon = 1e-6);

    let last = optimizer[0];
    assert_abs_diff_eq!(last.learning_rate, 0.001, epsilon = 1e-6);
    assert!(optimizer.iter().all(|group| *group == last));

    let err = scheduler.apply(&mut optimizer).unwrap_err();
    assert!(matches!(err, ScheduleErr::Exhausted { len: 220 }));
    assert_eq!(optimizer[0], last);

    Ok(())
}

#[test]
fn range_finder_sweep() -> anyhow::Result<()> {
    init_logger();

    let mut finder = LrRangeFinder::new(50, 0.1, 1.)?;
    let mut optimizer = vec![ParamGroup::new(0., 0.9)];

    let lrs = (0..50)
        .map(|_| finder.apply(&mut optimizer))
        .collect::<Result<Vec<_>, _>>()?;

    assert_abs_diff_eq!(lrs[0], 0.1, epsilon = 1e-6);
    assert_abs_diff_eq!(lrs[49], 1., epsilon = 1e-6);
    assert_eq!(finder.current(), lrs[49]);
    assert_eq!(optimizer[0].momentum, 0.9);

    Ok(())
}

#[test]
fn cyclic_restarts_every_cycle() -> anyhow::Result<()> {
    init_logger();

    let dataset = vec![0u8; 100];
    let mut scheduler = CyclicScheduler::new(&dataset, 10, vec![1, 1, 1, 1], 0.1, 1.)?;
    let mut optimizer = vec![ParamGroup::new(0., 0.9); 2];

    let mut lrs = Vec::with_capacity(scheduler.len());
    while scheduler.remaining() > 0 {
        lrs.push(scheduler.apply(&mut optimizer)?);
    }

    assert_eq!(lrs.len(), 80);
    for cycle in lrs.chunks(20) {
        assert_abs_diff_eq!(cycle[0], 0.1, epsilon = 1e-6);
        assert_abs_diff_eq!(cycle[9], 1., epsilon = 1e-6);
        assert_abs_diff_eq!(cycle[19], 0.1, epsilon = 1e-6);
    }

    for group in &optimizer {
        assert_eq!(group.learning_rate, lrs[79]);
    }

    scheduler.reset();
    assert_eq!(scheduler.advance()?, lrs[0]);

    Ok(())
}

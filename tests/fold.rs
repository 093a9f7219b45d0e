use outcomes::{
    flat_map, is_failure, is_success, make_failure, make_success, sequence, traverse, try_flat_map, try_traverse,
    unwrap_payload, FoldHalted, Outcome, Outcome::Failure, Outcome::Success, Values,
};
use tools::{init_logger, FoldCaseBuilder, Probe};

mod tools;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Reason {
    X,
    Odd,
}

fn half(v: i32) -> Outcome<i32, Reason> {
    if v % 2 == 0 {
        Success(v / 2)
    } else {
        Failure(Reason::Odd)
    }
}

#[test]
fn test_scenarios() -> anyhow::Result<()> {
    FoldCaseBuilder::new(|| sequence(vec![Success::<_, Reason>(1), Success(2), Success(3)]))
        .name("sequence all success")
        .expected(Success(vec![1, 2, 3]))
        .run()?;

    FoldCaseBuilder::new(|| sequence(vec![Success(1), Failure(Reason::X), Success(3)]))
        .name("sequence first failure")
        .expected(Failure(Reason::X))
        .run()?;

    FoldCaseBuilder::new(|| traverse(vec![1, 2, 3], |v| Success::<_, Reason>(v * 2)))
        .name("traverse doubles")
        .expected(Success(vec![2, 4, 6]))
        .run()?;

    FoldCaseBuilder::new(|| {
        traverse(vec![1, 2, 3], |v| {
            if v == 2 {
                Failure(Reason::Odd)
            } else {
                Success(v)
            }
        })
    })
    .name("traverse halts")
    .expected(Failure(Reason::Odd))
    .run()?;

    FoldCaseBuilder::new(|| flat_map(vec![Success(2), Success(4)], half))
        .name("flat_map halves")
        .expected(Success(vec![1, 2]))
        .run()?;

    FoldCaseBuilder::new(|| sequence(vec![Success::<(), Reason>(()), Success(())]))
        .name("sequence bare successes")
        .expected(Success(vec![]))
        .run()?;

    let probe: Probe<i32> = Probe::new();
    let f = probe.wrap(half);
    FoldCaseBuilder::new(move || flat_map(vec![Success(2), Success(3), Success(4)], f))
        .name("flat_map failure from f")
        .expected(Failure(Reason::Odd))
        .run()?;
    assert_eq!(probe.calls(), vec![2, 3]);

    Ok(())
}

#[test]
fn test_single_value_containers_are_kept() -> anyhow::Result<()> {
    FoldCaseBuilder::new(|| {
        sequence(vec![
            Success::<_, Reason>(vec![1]),
            Success(vec![]),
            Success(vec![2]),
        ])
    })
    .name("sequence keeps empty vec")
    .expected(Success(vec![vec![1], vec![], vec![2]]))
    .run()?;

    FoldCaseBuilder::new(|| traverse(vec![Some(1), None, Some(3)], Success::<_, Reason>))
        .name("traverse keeps none")
        .expected(Success(vec![Some(1), None, Some(3)]))
        .run()?;

    FoldCaseBuilder::new(|| {
        flat_map(vec![Success(0), Success(2)], |n: usize| {
            Success::<_, Reason>(vec!['x'; n])
        })
    })
    .name("flat_map keeps empty vec")
    .expected(Success(vec![vec![], vec!['x', 'x']]))
    .run()?;

    Ok(())
}

#[test]
fn test_guards_classify_fold_results() {
    let all = sequence(vec![Success::<_, Reason>(1), Success(2)]);
    let halted = sequence(vec![Success(1), Failure(Reason::X)]);

    assert!(is_success(&all));
    assert!(!is_failure(&all));
    assert!(is_failure(&halted));
    assert!(!is_success(&halted));
}

#[test]
fn test_empty_collections() -> anyhow::Result<()> {
    let probe: Probe<i32> = Probe::new();

    FoldCaseBuilder::new(|| sequence(Vec::<Outcome<i32, Reason>>::new()))
        .name("empty sequence")
        .expected(Success(vec![]))
        .run()?;

    let f = probe.wrap(|v| Success::<i32, Reason>(v));
    FoldCaseBuilder::new(move || traverse(Vec::<i32>::new(), f))
        .name("empty traverse")
        .expected(Success(vec![]))
        .run()?;

    assert!(probe.calls().is_empty());
    Ok(())
}

#[test]
fn test_traverse_never_calls_past_failure() {
    init_logger();
    let probe: Probe<i32> = Probe::new();

    let result = traverse(
        vec![1, 2, 3],
        probe.wrap(|v| {
            if v == 2 {
                Failure(Reason::Odd)
            } else {
                Success(v)
            }
        }),
    );

    assert_eq!(result, Failure(Reason::Odd));
    assert_eq!(probe.calls(), vec![1, 2]);
}

#[test]
fn test_flat_map_never_calls_past_failure() {
    init_logger();
    let probe: Probe<i32> = Probe::new();

    let result = flat_map(
        vec![Success(2), Failure(Reason::X), Success(4), Failure(Reason::Odd)],
        probe.wrap(half),
    );

    assert_eq!(result, Failure(Reason::X));
    assert_eq!(probe.calls(), vec![2]);
}

#[test]
fn test_lazy_input_is_not_forced() {
    init_logger();
    let pulled: Probe<i32> = Probe::new();

    let outcomes = (1..).inspect(|v| pulled.record(*v)).map(|v| {
        if v < 4 {
            Success(v)
        } else {
            Failure(Reason::X)
        }
    });

    assert_eq!(sequence(outcomes), Failure(Reason::X));
    assert_eq!(pulled.calls(), vec![1, 2, 3, 4]);
}

#[test]
fn test_traverse_identity_matches_sequence() {
    let payloads = vec![
        Values::One(1),
        Values::Empty,
        Values::Many(vec![2, 3]),
        Values::Empty,
        Values::One(4),
    ];
    let outcomes: Vec<Outcome<Values<i32>, Reason>> =
        payloads.iter().cloned().map(make_success).collect();

    let sequenced = sequence(outcomes);
    let traversed = traverse(payloads, make_success);

    assert_eq!(sequenced, traversed);
    assert_eq!(
        sequenced,
        Success(vec![Values::One(1), Values::Many(vec![2, 3]), Values::One(4)])
    );
}

#[test]
fn test_first_failure_wins() {
    let outcomes = vec![
        Success((1, 'a')),
        Failure((2, "first")),
        Failure((3, "second")),
    ];

    assert_eq!(sequence(outcomes.clone()), Failure((2, "first")));
    assert_eq!(
        flat_map(outcomes, |(n, c)| Success::<_, (i32, &str)>((c, n))),
        Failure((2, "first"))
    );
}

#[test]
fn test_try_variants_report_index() {
    let halted = try_traverse(10..20, |v| if v < 13 { Success(v) } else { Failure(v) });
    assert_eq!(
        halted,
        Err(FoldHalted {
            index: 3,
            failure: 13
        })
    );

    let chained = try_flat_map(vec![Success(8), Success(4)], half);
    assert_eq!(chained, Ok(vec![4, 2]));
}

#[test]
fn test_multi_value_payloads() {
    let outcome: Outcome<(i32, &str, bool), ()> = Success((1, "a", true));
    let payload = unwrap_payload(outcome.map_error(|_| (0, "", false)));
    assert_eq!(payload, (1, "a", true));
    assert_eq!(make_success::<_, ()>(payload), outcome);

    let outcomes: Vec<Outcome<(i32, i32), Reason>> = vec![Success((1, 2)), Success((3, 4))];
    assert_eq!(sequence(outcomes), Success(vec![(1, 2), (3, 4)]));

    let failure: Outcome<(i32, i32), (i32, i32)> = make_failure((5, 6));
    assert_eq!(make_failure::<(i32, i32), _>(unwrap_payload(failure)), failure);
}

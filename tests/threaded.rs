use std::sync::Arc;
use std::thread;

use predicat::{Condition, Record};

#[test]
fn evaluate_across_threads() {
    let condition = Arc::new(
        Condition::from_notation(
            "(AND[(age^GTE^18),(status^EQ^active),(NOT(banned^EQ^true))])",
        )
        .unwrap(),
    );

    let mut handles = vec![];

    // Thread 1: adult, active, not banned -> matches
    let cond = Arc::clone(&condition);
    handles.push(thread::spawn(move || {
        let record = Record::new()
            .set("age", 25)
            .set("status", "active")
            .set("banned", false);
        cond.evaluate(&record)
    }));

    // Thread 2: banned -> no match
    let cond = Arc::clone(&condition);
    handles.push(thread::spawn(move || {
        let record = Record::new()
            .set("age", 30)
            .set("status", "active")
            .set("banned", true);
        cond.evaluate(&record)
    }));

    // Thread 3: minor -> no match
    let cond = Arc::clone(&condition);
    handles.push(thread::spawn(move || {
        let record = Record::new()
            .set("age", 15)
            .set("status", "active")
            .set("banned", false);
        cond.evaluate(&record)
    }));

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results[0], Ok(true));
    assert_eq!(results[1], Ok(false));
    assert_eq!(results[2], Ok(false));
}

#[test]
fn shared_record_many_readers() {
    let record = Arc::new(Record::new().set("name", "Joanna").set("score", 88));
    let conditions: Vec<Condition> = [
        "(name^SW^Jo)",
        "(name^EW^nna)",
        "(score^GT^80)",
        "(OR[(score^LT^10),(name^CT^ann)])",
    ]
    .iter()
    .map(|text| Condition::from_notation(text).unwrap())
    .collect();

    let handles: Vec<_> = conditions
        .into_iter()
        .map(|cond| {
            let record = Arc::clone(&record);
            thread::spawn(move || cond.matches(&*record))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn conditions_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Condition>();
    assert_send_sync::<Record>();
}

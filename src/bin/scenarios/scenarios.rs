//! The scenario battery.
//!
//! Each scenario exercises one area of `EqSet` and returns an error at the
//! first violated expectation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, ensure};
use eqset::persistence::{self, PersistenceError};
use eqset::predicate::is_long_string;
use eqset::{EqSet, Equivalence, Point, PointEquality, intersection, union};

type IntSet = EqSet<i32>;
type StringSet = EqSet<String>;
type PointSet = EqSet<Point, PointEquality>;

/// Where scenarios may write files.
pub struct Workspace {
    directory: PathBuf,
}

impl Workspace {
    pub const fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub run: fn(&Workspace) -> Result<()>,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "int-basics",
        description: "integer add, remove and contains",
        run: int_basics,
    },
    Scenario {
        name: "strings",
        description: "string elements",
        run: strings,
    },
    Scenario {
        name: "custom-type",
        description: "points under a custom comparator",
        run: custom_type,
    },
    Scenario {
        name: "from-sequence",
        description: "construction from a sequence with duplicates",
        run: from_sequence,
    },
    Scenario {
        name: "copy-assign",
        description: "copy, assignment and assignment of an equal copy",
        run: copy_assign,
    },
    Scenario {
        name: "iteration",
        description: "iteration and indexed reads",
        run: iteration,
    },
    Scenario {
        name: "algebra",
        description: "union and intersection edge cases",
        run: algebra,
    },
    Scenario {
        name: "filter",
        description: "filtering with a predicate",
        run: filter,
    },
    Scenario {
        name: "stress",
        description: "one hundred adds then one hundred removes",
        run: stress,
    },
    Scenario {
        name: "files",
        description: "save, load and missing-file handling",
        run: files,
    },
];

fn strings_of(words: &[&str]) -> StringSet {
    words.iter().map(|word| (*word).to_string()).collect()
}

fn int_basics(_: &Workspace) -> Result<()> {
    let mut set = IntSet::new();
    ensure!(set.is_empty(), "new set is not empty");

    set.remove(&10);
    ensure!(set.is_empty(), "removing from an empty set changed it");

    set.add(5);
    set.add(10);
    set.add(5);
    set.add(-5);
    ensure!(set.len() == 3, "expected 3 elements, found {}", set.len());
    ensure!(set.contains(&5) && set.contains(&-5), "added elements missing");
    ensure!(!set.contains(&0), "set contains an element never added");

    set.remove(&5);
    ensure!(set.len() == 2 && !set.contains(&5), "remove(5) did not remove");

    set.remove(&999);
    ensure!(set.len() == 2, "removing an absent element changed the size");

    set.remove(&10);
    set.remove(&-5);
    ensure!(set.is_empty(), "set not empty after removing everything");
    Ok(())
}

fn strings(_: &Workspace) -> Result<()> {
    let mut set = strings_of(&["Hello", "World", "C++", "Hello"]);
    ensure!(set.len() == 3, "expected 3 strings, found {}", set.len());
    ensure!(set.contains(&"World".to_string()), "missing `World`");

    let probe = String::from("C++");
    ensure!(set.contains(&probe), "lookup through an owned copy failed");

    set.remove(&"Hello".to_string());
    ensure!(set.len() == 2, "remove(`Hello`) did not shrink the set");
    Ok(())
}

fn custom_type(_: &Workspace) -> Result<()> {
    let mut set = PointSet::new();
    let origin = Point::new(0, 0);
    let other = Point::new(1, 2);
    set.add(origin);
    set.add(other);
    set.add(Point::new(0, 0));

    ensure!(set.len() == 2, "equivalent points did not collapse");
    ensure!(set.contains(&Point::new(1, 2)), "lookup through a temporary failed");

    let found =
        |wanted: Point| (0..set.len()).any(|index| PointEquality.equivalent(&set[index], &wanted));
    ensure!(found(origin) && found(other), "indexed reads miss a stored point");
    Ok(())
}

fn from_sequence(_: &Workspace) -> Result<()> {
    let values = [1, 2, 3, 2, 4, 1];
    let set: IntSet = values.iter().copied().collect();
    ensure!(set.len() == 4, "expected 4 distinct values, found {}", set.len());
    ensure!(set.contains(&1) && set.contains(&4), "sequence values missing");
    ensure!(!set.contains(&5), "set contains a value not in the sequence");

    let empty: IntSet = values[..0].iter().copied().collect();
    ensure!(empty.is_empty(), "empty sequence produced elements");
    Ok(())
}

fn copy_assign(_: &Workspace) -> Result<()> {
    let mut first = IntSet::new();
    first.add(10);
    first.add(20);

    let second = first.clone();
    ensure!(second == first && second.len() == 2, "copy differs from its source");

    first.remove(&10);
    ensure!(first.len() == 1, "source did not shrink");
    ensure!(second.len() == 2 && second.contains(&10), "copy shares storage with its source");

    let mut third = IntSet::new();
    third.add(99);
    third.clone_from(&second);
    ensure!(third == second, "assignment did not copy");
    ensure!(third.contains(&10) && !third.contains(&99), "assignment kept stale contents");

    let snapshot = third.clone();
    third.try_assign_from(&snapshot)?;
    ensure!(third.len() == 2 && third.contains(&10), "assigning an equal copy lost data");
    Ok(())
}

fn iteration(_: &Workspace) -> Result<()> {
    let set: IntSet = [1, 2, 3].into_iter().collect();

    let mut count = 0;
    for value in &set {
        ensure!((1..=3).contains(value), "unexpected element {value}");
        count += 1;
    }
    ensure!(count == 3, "iteration visited {count} elements");

    let frozen = set.clone();
    ensure!(frozen.iter().next() == Some(&set[0]), "iteration does not start at index 0");
    Ok(())
}

fn algebra(_: &Workspace) -> Result<()> {
    let a: IntSet = [1, 2].into_iter().collect();
    let b: IntSet = [3, 4].into_iter().collect();
    let empty = IntSet::new();

    ensure!(union(&a, &b).len() == 4, "union of disjoint sets lost elements");
    ensure!(intersection(&a, &b).is_empty(), "disjoint sets intersect");

    let a_clone = a.clone();
    ensure!(union(&a, &a_clone) == a, "A ∪ A differs from A");
    ensure!(intersection(&a, &a_clone) == a, "A ∩ A differs from A");

    ensure!(union(&a, &empty) == a, "A ∪ ∅ differs from A");
    ensure!(intersection(&a, &empty).is_empty(), "A ∩ ∅ is not empty");
    ensure!(intersection(&empty, &a).is_empty(), "∅ ∩ A is not empty");
    Ok(())
}

fn filter(_: &Workspace) -> Result<()> {
    let set = strings_of(&["no", "yes", "maybe", "ok"]);
    let long = eqset::filter(&set, |word| is_long_string(word));

    ensure!(long.len() == 1, "expected one long string, found {}", long.len());
    ensure!(long.contains(&"maybe".to_string()), "`maybe` was filtered out");
    ensure!(!long.contains(&"yes".to_string()), "`yes` passed the filter");
    Ok(())
}

fn stress(_: &Workspace) -> Result<()> {
    let mut set = IntSet::new();
    for value in 0..100 {
        set.add(value);
    }
    ensure!(set.len() == 100, "expected 100 elements, found {}", set.len());

    for value in 0..100 {
        set.remove(&value);
    }
    ensure!(set.is_empty(), "{} elements left after removing all", set.len());

    set.add(1);
    ensure!(set.len() == 1, "set unusable after being emptied");
    Ok(())
}

fn files(workspace: &Workspace) -> Result<()> {
    let mut saved = PointSet::new();
    saved.add(Point::new(1, 1));
    saved.add(Point::new(2, 2));
    saved.add(Point::new(3, 3));

    let path = workspace.directory().join("eqset_point_set.txt");
    persistence::serialize(&saved, &path)?;

    let mut loaded = PointSet::new();
    loaded.add(Point::new(9, 9));
    let outcome = persistence::load_into(&path, &mut loaded);
    fs::remove_file(&path)?;
    outcome?;

    ensure!(loaded.len() == 3, "expected 3 loaded points, found {}", loaded.len());
    ensure!(loaded == saved, "loaded set differs from the saved one");
    ensure!(!loaded.contains(&Point::new(9, 9)), "load kept stale contents");

    let missing = workspace.directory().join("eqset_missing_12345.txt");
    let result: Result<PointSet, PersistenceError> = persistence::deserialize(&missing);
    ensure!(
        matches!(result, Err(PersistenceError::Open { .. })),
        "loading a missing file did not fail to open"
    );
    Ok(())
}

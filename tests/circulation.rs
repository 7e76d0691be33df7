//! End-to-end tests for the catalog and circulation engine

use chrono::NaiveDate;

use libris_core::models::{CreateBook, CreateMember, IssueOutcome, ReturnOutcome};
use libris_core::{LibraryError, LibraryService};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A library seeded with the demo inventory and three members.
fn seeded_library() -> LibraryService {
    let mut library = LibraryService::new();
    library.load_sample_books().expect("sample books");
    library.load_sample_members().expect("sample members");
    library
}

#[test]
fn add_book_assigns_canonical_ids() {
    let mut library = LibraryService::new();
    let book = library
        .add_book(CreateBook::new("Dune", "Frank Herbert", "SciFi", 2))
        .unwrap();
    assert_eq!(book.id, 101);
    assert_eq!(book.available_copies, 2);

    let fetched = library.get_book_by_id(101).unwrap();
    assert_eq!(fetched.title, "Dune");
    assert!(matches!(
        library.get_book_by_id(999),
        Err(LibraryError::BookNotFound(999))
    ));
}

#[test]
fn search_prefers_exact_id_over_prefix() {
    let library = seeded_library();

    // Numeric query with an exact id match returns that single book
    let by_id = library.search_books("102");
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].title, "Clean Code");

    // Numeric query without a match falls through to the prefix index
    assert!(library.search_books("999").is_empty());

    // Title prefix search is case-insensitive
    let by_prefix = library.search_books("clean c");
    assert_eq!(by_prefix.len(), 1);
    assert_eq!(by_prefix[0].title, "Clean Code");
    assert!(library.search_books("Zz").is_empty());
}

#[test]
fn prefix_search_returns_every_shared_prefix_match() {
    let mut library = LibraryService::new();
    library
        .add_book(CreateBook::new("Clean Code", "Robert C. Martin", "Tech", 1))
        .unwrap();
    library
        .add_book(CreateBook::new("Clean Coding", "Someone Else", "Tech", 1))
        .unwrap();

    let mut titles: Vec<&str> = library
        .search_books("Clean C")
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["Clean Code", "Clean Coding"]);
}

#[test]
fn categories_keep_append_order() {
    let library = seeded_library();
    let tech: Vec<&str> = library
        .get_books_by_category("Tech")
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(tech, vec!["Clean Code"]);
    assert!(library.get_books_by_category("Cooking").is_empty());
    assert_eq!(library.categories(), vec!["Fiction", "Tech", "Education"]);
}

#[test]
fn registration_validates_the_phone_number() {
    let mut library = LibraryService::new();

    let ok = library.register_member(CreateMember::new("Asha", "asha@example.com", "9123456789"));
    assert!(ok.is_ok());

    // Leading digit outside 6-9
    let bad_prefix =
        library.register_member(CreateMember::new("Bad", "bad@example.com", "1234567890"));
    assert!(matches!(bad_prefix, Err(LibraryError::Validation(_))));

    // Nine digits
    let too_short =
        library.register_member(CreateMember::new("Short", "short@example.com", "812345678"));
    assert!(matches!(too_short, Err(LibraryError::Validation(_))));
}

#[test]
fn issue_then_return_round_trip() {
    let mut library = seeded_library();
    let today = date(2024, 3, 1);

    let before = library.get_book_by_id(102).unwrap().available_copies;
    let outcome = library.issue_book_on(102, 1, today).unwrap();
    assert_eq!(
        outcome,
        IssueOutcome::Issued {
            due_date: date(2024, 3, 15)
        }
    );
    assert_eq!(library.get_book_by_id(102).unwrap().available_copies, before - 1);
    assert!(library
        .get_member(1)
        .unwrap()
        .current_borrowed_books
        .contains(&102));

    let outcome = library.return_book_on(102, 1, today).unwrap();
    assert_eq!(outcome, ReturnOutcome::Returned);
    assert_eq!(library.get_book_by_id(102).unwrap().available_copies, before);

    // Exactly one record exists for the pair and it is flagged returned
    let records: Vec<_> = library
        .issue_records()
        .filter(|r| r.book_id == 102 && r.member_id == 1)
        .collect();
    assert_eq!(records.len(), 1);
    assert!(records[0].returned);
}

#[test]
fn issue_validates_both_ids_without_mutating() {
    let mut library = seeded_library();

    assert_eq!(
        library.issue_book(999, 1).unwrap_err(),
        LibraryError::BookNotFound(999)
    );
    assert_eq!(
        library.issue_book(101, 99).unwrap_err(),
        LibraryError::MemberNotFound(99)
    );
    assert_eq!(library.get_book_by_id(101).unwrap().available_copies, 5);
}

#[test]
fn returning_an_unborrowed_book_fails() {
    let mut library = seeded_library();
    assert_eq!(
        library.return_book(101, 1).unwrap_err(),
        LibraryError::NotBorrowed {
            book: 101,
            member: 1
        }
    );
}

#[test]
fn exhausted_books_queue_issuers_in_fifo_order() {
    let mut library = seeded_library();
    let today = date(2024, 3, 1);

    // Book 104 has two copies; members 1 and 2 take both
    library
        .add_book(CreateBook::new("Rare Volume", "Anon", "Fiction", 2))
        .unwrap();
    library.issue_book_on(104, 1, today).unwrap();
    library.issue_book_on(104, 2, today).unwrap();

    // Member 3 lands in the queue at position 1
    let outcome = library.issue_book_on(104, 3, today).unwrap();
    assert_eq!(outcome, IssueOutcome::Queued { position: 1 });
    assert_eq!(library.get_reservations_for_book(104).len(), 1);
}

#[test]
fn freed_copies_are_reassigned_to_the_queue_head() {
    let mut library = LibraryService::new();
    library
        .add_book(CreateBook::new("Single Copy", "Anon", "Fiction", 1))
        .unwrap();
    let a = library
        .register_member(CreateMember::new("A", "a@example.com", "9000000001"))
        .unwrap()
        .id;
    let b = library
        .register_member(CreateMember::new("B", "b@example.com", "9000000002"))
        .unwrap()
        .id;
    let c = library
        .register_member(CreateMember::new("C", "c@example.com", "9000000003"))
        .unwrap()
        .id;
    let d = library
        .register_member(CreateMember::new("D", "d@example.com", "9000000004"))
        .unwrap()
        .id;
    let today = date(2024, 3, 1);

    library.issue_book_on(101, a, today).unwrap();
    assert_eq!(library.reserve_book(101, b).unwrap(), 1);
    assert_eq!(library.reserve_book(101, c).unwrap(), 2);
    assert_eq!(library.reserve_book(101, d).unwrap(), 3);

    // The freed copy goes to B, the head of the queue
    let outcome = library.return_book_on(101, a, today).unwrap();
    assert_eq!(
        outcome,
        ReturnOutcome::ReturnedAndReassigned {
            member_id: b,
            due_date: date(2024, 3, 15)
        }
    );

    // The copy never touched the shelf, and C is now the head
    assert_eq!(library.get_book_by_id(101).unwrap().available_copies, 0);
    let waiting: Vec<u32> = library
        .get_reservations_for_book(101)
        .iter()
        .map(|r| r.member_id)
        .collect();
    assert_eq!(waiting, vec![c, d]);
}

#[test]
fn reserving_an_available_book_is_rejected() {
    let mut library = seeded_library();
    assert_eq!(
        library.reserve_book(101, 1).unwrap_err(),
        LibraryError::CopiesAvailable(101)
    );
}

#[test]
fn the_twenty_first_reservation_is_refused() {
    let mut library = LibraryService::new();
    library
        .add_book(CreateBook::new("Hot Title", "Anon", "Fiction", 1))
        .unwrap();
    let holder = library
        .register_member(CreateMember::new("Holder", "holder@example.com", "9000000000"))
        .unwrap()
        .id;
    library.issue_book(101, holder).unwrap();

    for i in 0..20 {
        let member = library
            .register_member(CreateMember::new(
                format!("Member {i}"),
                format!("member{i}@example.com"),
                format!("9{:09}", i + 1),
            ))
            .unwrap()
            .id;
        assert_eq!(library.reserve_book(101, member).unwrap(), i + 1);
    }

    let last = library
        .register_member(CreateMember::new("Late", "late@example.com", "9999999999"))
        .unwrap()
        .id;
    assert_eq!(
        library.reserve_book(101, last).unwrap_err(),
        LibraryError::ReservationQueueFull(101)
    );
    assert_eq!(library.get_reservations_for_book(101).len(), 20);
}

#[test]
fn overdue_ranking_is_worst_offender_first() {
    let mut library = seeded_library();

    // Due dates: 2024-01-01, 2024-01-04, and one not yet due
    library.issue_book_on(101, 1, date(2023, 12, 18)).unwrap();
    library.issue_book_on(102, 2, date(2023, 12, 21)).unwrap();
    library.issue_book_on(103, 3, date(2024, 1, 5)).unwrap();

    let overdue = library.overdue_books_as_of(date(2024, 1, 6));
    assert_eq!(overdue.len(), 2);

    assert_eq!(overdue[0].book_id, 101);
    assert_eq!(overdue[0].days_overdue, 5);
    assert_eq!(overdue[0].fine_amount, 25.0);
    assert_eq!(overdue[0].member_name, "Aarav Sharma");

    assert_eq!(overdue[1].book_id, 102);
    assert_eq!(overdue[1].days_overdue, 2);
    assert_eq!(overdue[1].fine_amount, 10.0);
}

#[test]
fn returned_books_never_rank_as_overdue() {
    let mut library = seeded_library();
    library.issue_book_on(101, 1, date(2023, 12, 18)).unwrap();
    library.return_book_on(101, 1, date(2024, 1, 2)).unwrap();

    assert!(library.overdue_books_as_of(date(2024, 1, 6)).is_empty());
}

#[test]
fn member_details_collect_loans_and_reservations() {
    let mut library = seeded_library();
    let today = date(2024, 1, 6);

    library.issue_book_on(101, 1, date(2023, 12, 18)).unwrap();
    library.issue_book_on(103, 1, date(2024, 1, 5)).unwrap();

    // Drain book 102 with member 2, then queue member 1 behind it
    library.issue_book_on(102, 2, today).unwrap();
    library.issue_book_on(102, 2, today).unwrap();
    library.issue_book_on(102, 2, today).unwrap();
    library.reserve_book(102, 1).unwrap();

    let details = library.member_details_as_of(1, today).unwrap();
    assert_eq!(details.member.id, 1);
    assert_eq!(details.open_issues.len(), 2);

    let gatsby = details
        .open_issues
        .iter()
        .find(|issue| issue.book.id == 101)
        .unwrap();
    assert!(gatsby.is_overdue);
    let data_structures = details
        .open_issues
        .iter()
        .find(|issue| issue.book.id == 103)
        .unwrap();
    assert!(!data_structures.is_overdue);

    assert_eq!(details.reservations.len(), 1);
    assert_eq!(details.reservations[0].book_id, 102);

    assert_eq!(
        library.member_details_as_of(42, today).unwrap_err(),
        LibraryError::MemberNotFound(42)
    );
}

#[test]
fn issues_are_recorded_in_the_action_log() {
    let mut library = seeded_library();
    let today = date(2024, 3, 1);

    library.issue_book_on(101, 1, today).unwrap();
    library.issue_book_on(102, 2, today).unwrap();

    let recent: Vec<&str> = library.recent_actions().collect();
    assert_eq!(
        recent,
        vec![
            "ISSUED: book 102 to member 2",
            "ISSUED: book 101 to member 1",
        ]
    );
}

#[test]
fn stats_track_circulation_activity() {
    let mut library = seeded_library();
    let today = date(2024, 1, 6);

    library.issue_book_on(101, 1, date(2023, 12, 18)).unwrap();
    library.issue_book_on(102, 2, date(2024, 1, 5)).unwrap();

    let stats = library.stats_as_of(today);
    assert_eq!(stats.total_titles, 3);
    assert_eq!(stats.total_copies, 10);
    assert_eq!(stats.available_copies, 8);
    assert_eq!(stats.total_members, 3);
    assert_eq!(stats.active_loans, 2);
    assert_eq!(stats.overdue_loans, 1);
    assert_eq!(stats.pending_reservations, 0);
}

#[test]
fn outcomes_serialize_with_a_status_tag() {
    let outcome = IssueOutcome::Queued { position: 2 };
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "queued");
    assert_eq!(json["position"], 2);

    let outcome = ReturnOutcome::Returned;
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "returned");
}

#[test]
fn times_issued_counts_every_hand_out() {
    let mut library = seeded_library();
    let today = date(2024, 3, 1);

    library.issue_book_on(102, 1, today).unwrap();
    library.return_book_on(102, 1, today).unwrap();
    library.issue_book_on(102, 1, today).unwrap();

    let book = library.get_book_by_id(102).unwrap();
    assert_eq!(book.times_issued, 2);

    // Two records for the pair across time: one closed, one open
    let flags: Vec<bool> = library
        .issue_records()
        .filter(|r| r.book_id == 102 && r.member_id == 1)
        .map(|r| r.returned)
        .collect();
    assert_eq!(flags, vec![true, false]);
}

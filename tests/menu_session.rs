use std::io::Cursor;
use studentdb::commands::menu::run_menu;
use studentdb::{SqliteStudentTable, Student, StudentService, StudentTable};

fn create_test_service() -> StudentService<SqliteStudentTable> {
    let table = SqliteStudentTable::open_in_memory().unwrap();
    StudentService::new(table).unwrap()
}

fn run_script(service: &StudentService<SqliteStudentTable>, script: &str) {
    let mut input = Cursor::new(script.to_string());
    run_menu(service, &mut input).unwrap();
}

#[test]
fn test_create_update_remove_session() {
    let service = create_test_service();

    run_script(
        &service,
        "1\n1, Ann, Lee, 3.5, CS, Dr. Smith\n\
         2\n1, Math, Jones\n\
         3\n*, *, jones\n\
         0\n\
         q\n",
    );

    let stored = service.table().find_by_id(1).unwrap().unwrap();
    assert_eq!(stored, Student::new(1, "Ann", "Lee", 3.5, "Math", "Jones"));

    run_script(&service, "4\n1\nq\n");
    assert!(service.table().find_by_id(1).unwrap().unwrap().is_deleted);
}

#[test]
fn test_create_form_retries_until_valid() {
    let service = create_test_service();

    run_script(
        &service,
        "1\n\
         1, Ann\n\
         x, Ann, Lee, 3.5, CS, Smith\n\
         1, Ann, Lee, 3.5, Computer Science, Smith\n\
         1, Ann, Lee, 3.5, CS, Smith\n\
         q\n",
    );

    assert_eq!(
        service.table().find_by_id(1).unwrap(),
        Some(Student::new(1, "Ann", "Lee", 3.5, "CS", "Smith"))
    );
}

#[test]
fn test_remove_form_is_single_shot() {
    let service = create_test_service();
    service
        .create(Student::new(7, "Ann", "Lee", 3.5, "CS", "Smith"))
        .unwrap();

    // "7" after the malformed id is read as a menu choice, not a second attempt
    run_script(&service, "4\nseven\n7\nq\n");

    assert!(!service.table().find_by_id(7).unwrap().unwrap().is_deleted);
}

#[test]
fn test_business_errors_do_not_end_session() {
    let service = create_test_service();

    run_script(
        &service,
        "1\n2, Bob, Ray, 3.0, Math, Jones\n\
         1\n2, Eve, Kim, 4.0, Art, Moss\n\
         2\n99, Math, Jones\n\
         4\n99\n\
         9\n\
         1\n3, Cat, Fox, 2.5, Art, Moss\n\
         q\n",
    );

    assert_eq!(service.table().count_by_id(2).unwrap(), 1);
    assert_eq!(service.table().find_by_id(2).unwrap().unwrap().first_name, "Bob");
    assert!(service.exists(3).unwrap());
}

#[test]
fn test_session_ends_at_end_of_input() {
    let service = create_test_service();

    run_script(&service, "1\n");
    run_script(&service, "");

    assert!(service.list_all().unwrap().is_empty());
}

#[test]
fn test_invalid_utf8_form_line_is_retried() {
    let service = create_test_service();
    let script = b"1\n1, Ann, Lee, 3.5, CS, Sm\xffith\n1, Ann, Lee, 3.5, CS, Smith\nq\n";

    run_menu(&service, &mut Cursor::new(script.to_vec())).unwrap();

    assert_eq!(
        service.table().find_by_id(1).unwrap(),
        Some(Student::new(1, "Ann", "Lee", 3.5, "CS", "Smith"))
    );
}

#[test]
fn test_invalid_utf8_menu_choice_is_ignored() {
    let service = create_test_service();
    let script = b"\xfe\n1\n4, Bob, Ray, 3.0, Math, Jones\nq\n";

    run_menu(&service, &mut Cursor::new(script.to_vec())).unwrap();

    assert!(service.exists(4).unwrap());
}

#[test]
fn test_nan_gpa_form_is_retried() {
    let service = create_test_service();

    run_script(
        &service,
        "1\n1, Ann, Lee, NaN, CS, Smith\n1, Ann, Lee, 3.5, CS, Smith\n0\nq\n",
    );

    assert_eq!(service.list_all().unwrap().len(), 1);
    assert_eq!(service.table().find_by_id(1).unwrap().unwrap().gpa, 3.5);
}

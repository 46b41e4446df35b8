use people_core::db::open_db_in_memory;
use people_core::{DataAccess, DataAccessError, PersonModel, PersonProcessor, SqliteDataAccess};

#[test]
fn save_then_load_assigns_store_ids() {
    let conn = open_db_in_memory().unwrap();
    let processor = PersonProcessor::new(SqliteDataAccess::new(&conn));

    let tim = processor.create_person("Tim", "Corey", "6'8\"").unwrap();
    let sue = processor.create_person("Sue", "Storm", "5'6.5\"").unwrap();
    processor.save_person(&tim).unwrap();
    processor.save_person(&sue).unwrap();

    let people = processor.load_people().unwrap();
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].id, 1);
    assert_eq!(people[0].first_name, "Tim");
    assert_eq!(people[0].height_in_inches, 80.0);
    assert_eq!(people[1].id, 2);
    assert_eq!(people[1].height_in_inches, 66.5);
}

#[test]
fn save_ignores_record_id() {
    let conn = open_db_in_memory().unwrap();
    let processor = PersonProcessor::new(SqliteDataAccess::new(&conn));

    let mut fernando = PersonModel::new("Fernando", "JS", 120.0);
    fernando.id = 99;
    processor.save_person(&fernando).unwrap();

    let people = processor.load_people().unwrap();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].id, 1);
}

#[test]
fn update_rewrites_row_keyed_by_id() {
    let conn = open_db_in_memory().unwrap();
    let processor = PersonProcessor::new(SqliteDataAccess::new(&conn));

    processor
        .save_person(&PersonModel::new("Fernando", "Jesus Santos", 120.0))
        .unwrap();
    let mut stored = processor.load_people().unwrap().remove(0);
    stored.last_name = "JS".to_string();
    processor.update_person(&stored).unwrap();

    assert_eq!(processor.load_people().unwrap(), vec![stored]);
}

#[test]
fn update_of_missing_id_is_a_silent_no_op() {
    let conn = open_db_in_memory().unwrap();
    let processor = PersonProcessor::new(SqliteDataAccess::new(&conn));

    let mut ghost = PersonModel::new("Ghost", "Person", 60.0);
    ghost.id = 404;
    processor.update_person(&ghost).unwrap();

    assert!(processor.load_people().unwrap().is_empty());
}

#[test]
fn placeholder_without_matching_column_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let data_access = SqliteDataAccess::new(&conn);

    let err = data_access
        .save_data(
            &PersonModel::new("Tim", "Corey", 80.0),
            "insert into Person (FirstName, LastName) values (@FirstName, @Nickname)",
        )
        .unwrap_err();
    assert!(matches!(err, DataAccessError::MissingColumn(ref column) if column == "Nickname"));
}

#[test]
fn positional_placeholders_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    let data_access = SqliteDataAccess::new(&conn);

    let err = data_access
        .update_data(
            &PersonModel::new("Tim", "Corey", 80.0),
            "update Person set FirstName = ? where Id = @Id",
        )
        .unwrap_err();
    assert!(matches!(err, DataAccessError::UnnamedParameter(1)));
}

#[test]
fn malformed_sql_surfaces_store_error() {
    let conn = open_db_in_memory().unwrap();
    let processor = PersonProcessor::new(SqliteDataAccess::new(&conn));
    conn.execute_batch("DROP TABLE Person;").unwrap();

    let err = processor.load_people().unwrap_err();
    assert!(matches!(err, DataAccessError::Db(_)));
    assert!(err.to_string().contains("Person"));
}

#[test]
fn load_maps_columns_by_name_regardless_of_order() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO Person (FirstName, LastName, HeightInInches) VALUES ('Tim', 'Corey', 80);",
        [],
    )
    .unwrap();
    let data_access = SqliteDataAccess::new(&conn);

    let people: Vec<PersonModel> = data_access
        .load_data("select HeightInInches, LastName, FirstName, Id from Person")
        .unwrap();
    let expected = PersonModel {
        id: 1,
        ..PersonModel::new("Tim", "Corey", 80.0)
    };
    assert_eq!(people, vec![expected]);
}

//! Integration tests for the in-memory store

use chrono::Duration;
use uuid::Uuid;

use livraria_server::models::{
    author::AuthorInput, book::BookInput, reservation::CreateReservation, user::UserInput,
};
use livraria_server::repository::Repository;
use livraria_server::AppError;

fn author_input(first_name: &str, age: i32) -> AuthorInput {
    AuthorInput {
        first_name: first_name.to_string(),
        last_name: "calebe".to_string(),
        nationality: "brasileiro".to_string(),
        age,
    }
}

fn book_input(title: &str) -> BookInput {
    BookInput {
        title: title.to_string(),
        category: "infantil".to_string(),
        description: "um livro".to_string(),
        publication_year: 1999,
    }
}

fn user_input(username: &str) -> UserInput {
    UserInput {
        username: username.to_string(),
        email: format!("{}@example.com", username),
    }
}

#[tokio::test]
async fn created_ids_are_unique() {
    let store = Repository::new();

    let mut ids = Vec::new();
    for i in 0..10 {
        ids.push(store.authors.create(author_input("a", i)).await.id);
        ids.push(store.books.create(book_input("b")).await.id);
        ids.push(store.users.create(user_input(&format!("u{}", i))).await.id);
    }

    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[tokio::test]
async fn id_not_reused_after_delete() {
    let store = Repository::new();

    let first = store.books.create(book_input("primeiro")).await;
    store.books.delete(first.id).await.unwrap();

    let second = store.books.create(book_input("segundo")).await;
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn get_by_id_returns_created_fields() {
    let store = Repository::new();

    let author = store.authors.create(author_input("alvaro", 21)).await;
    let found = store.authors.get_by_id(author.id).await.unwrap();
    assert_eq!(found.first_name, "alvaro");
    assert_eq!(found.last_name, "calebe");
    assert_eq!(found.nationality, "brasileiro");
    assert_eq!(found.age, 21);
    assert!(found.books.is_empty());

    let book = store.books.create(book_input("chapeuzinho vermelho")).await;
    let found = store.books.get_by_id(book.id).await.unwrap();
    assert_eq!(found.title, "chapeuzinho vermelho");
    assert_eq!(found.category, "infantil");
    assert_eq!(found.publication_year, 1999);

    let user = store.users.create(user_input("alvarocalebe")).await;
    let found = store.users.get_by_id(user.id).await.unwrap();
    assert_eq!(found.username, "alvarocalebe");
    assert_eq!(found.email, "alvarocalebe@example.com");
    assert!(found.reservations.is_empty());
}

#[tokio::test]
async fn update_overwrites_every_field() {
    let store = Repository::new();

    let author = store.authors.create(author_input("alvaro", 21)).await;
    store
        .authors
        .update(
            author.id,
            AuthorInput {
                first_name: "joao".to_string(),
                last_name: "silva".to_string(),
                nationality: "portugues".to_string(),
                age: 35,
            },
        )
        .await
        .unwrap();

    let found = store.authors.get_by_id(author.id).await.unwrap();
    assert_eq!(found.id, author.id);
    assert_eq!(found.first_name, "joao");
    assert_eq!(found.last_name, "silva");
    assert_eq!(found.nationality, "portugues");
    assert_eq!(found.age, 35);
}

#[tokio::test]
async fn update_preserves_book_list() {
    let store = Repository::new();

    let author = store.authors.create(author_input("alvaro", 21)).await;
    let book = store
        .authors
        .add_book(author.id, book_input("chapeuzinho vermelho"))
        .await
        .unwrap();

    store.authors.update(author.id, author_input("joao", 40)).await.unwrap();

    let found = store.authors.get_by_id(author.id).await.unwrap();
    assert_eq!(found.books, vec![book.id]);
}

#[tokio::test]
async fn missing_id_signals_not_found_and_mutates_nothing() {
    let store = Repository::new();
    store.authors.create(author_input("alvaro", 21)).await;

    let missing = Uuid::new_v4();

    assert!(matches!(
        store.authors.get_by_id(missing).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        store.authors.update(missing, author_input("x", 1)).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        store.authors.delete(missing).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        store.books.get_by_id(missing).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        store.books.update(missing, book_input("x")).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        store.books.delete(missing).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        store.users.get_by_id(missing).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        store.users.update(missing, user_input("x")).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        store.users.delete(missing).await,
        Err(AppError::NotFound(_))
    ));

    assert_eq!(store.authors.list().await.len(), 1);
    assert!(store.books.list().await.is_empty());
    assert!(store.users.list().await.is_empty());
}

#[tokio::test]
async fn add_book_inserts_once_on_each_side_with_one_identity() {
    let store = Repository::new();

    let author = store.authors.create(author_input("alvaro", 21)).await;
    let book = store
        .authors
        .add_book(author.id, book_input("chapeuzinho vermelho"))
        .await
        .unwrap();

    let books = store.books.list().await;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, book.id);

    let stored = store.authors.get_by_id(author.id).await.unwrap();
    assert_eq!(stored.books, vec![book.id]);

    // An edit through the global collection is visible through the author
    store
        .books
        .update(
            book.id,
            BookInput {
                title: "chapeuzinho amarelo".to_string(),
                category: "infantil".to_string(),
                description: "outro livro".to_string(),
                publication_year: 1979,
            },
        )
        .await
        .unwrap();

    let details = store.authors.get_details(author.id).await.unwrap();
    assert_eq!(details.books.len(), 1);
    assert_eq!(details.books[0].id, book.id);
    assert_eq!(details.books[0].title, "chapeuzinho amarelo");
}

#[tokio::test]
async fn add_book_to_missing_author_is_not_found() {
    let store = Repository::new();

    let err = store.authors.add_book(Uuid::new_v4(), book_input("x")).await;
    assert!(matches!(err, Err(AppError::NotFound(_))));
    assert!(store.books.list().await.is_empty());
}

#[tokio::test]
async fn deleting_book_does_not_cascade_to_author_list() {
    let store = Repository::new();

    let author = store.authors.create(author_input("alvaro", 21)).await;
    let book = store
        .authors
        .add_book(author.id, book_input("chapeuzinho vermelho"))
        .await
        .unwrap();

    store.books.delete(book.id).await.unwrap();

    // The author still holds the id; only the resolved view omits it
    let stored = store.authors.get_by_id(author.id).await.unwrap();
    assert_eq!(stored.books, vec![book.id]);

    let details = store.authors.get_details(author.id).await.unwrap();
    assert!(details.books.is_empty());
}

#[tokio::test]
async fn reservation_is_due_seven_days_after_loan() {
    let store = Repository::new();

    let book = store.books.create(book_input("chapeuzinho vermelho")).await;
    let user = store.users.create(user_input("alvarocalebe")).await;

    let reservation = store
        .users
        .add_reservation(user.id, CreateReservation { book_id: book.id })
        .await
        .unwrap();

    assert_eq!(reservation.book_id, Some(book.id));
    assert_eq!(reservation.due_date - reservation.loan_date, Duration::days(7));

    let stored = store.users.get_by_id(user.id).await.unwrap();
    assert_eq!(stored.reservations.len(), 1);
    assert_eq!(stored.reservations[0].id, reservation.id);
}

#[tokio::test]
async fn reservation_against_unknown_book_has_empty_reference() {
    let store = Repository::new();

    let user = store.users.create(user_input("alvarocalebe")).await;
    let reservation = store
        .users
        .add_reservation(user.id, CreateReservation { book_id: Uuid::new_v4() })
        .await
        .unwrap();

    assert_eq!(reservation.book_id, None);

    let details = store.users.get_details(user.id).await.unwrap();
    assert_eq!(details.reservations.len(), 1);
    assert!(details.reservations[0].book.is_none());
}

#[tokio::test]
async fn reservation_for_missing_user_records_nothing() {
    let store = Repository::new();

    let book = store.books.create(book_input("chapeuzinho vermelho")).await;
    let err = store
        .users
        .add_reservation(Uuid::new_v4(), CreateReservation { book_id: book.id })
        .await;

    assert!(matches!(err, Err(AppError::NotFound(_))));
    assert!(store.users.list().await.is_empty());
}

#[tokio::test]
async fn reservation_book_resolves_to_none_after_book_delete() {
    let store = Repository::new();

    let book = store.books.create(book_input("chapeuzinho vermelho")).await;
    let user = store.users.create(user_input("alvarocalebe")).await;
    store
        .users
        .add_reservation(user.id, CreateReservation { book_id: book.id })
        .await
        .unwrap();

    store.books.delete(book.id).await.unwrap();

    // The stored id stays behind; the resolved view shows no book
    let stored = store.users.get_by_id(user.id).await.unwrap();
    assert_eq!(stored.reservations[0].book_id, Some(book.id));

    let details = store.users.get_details(user.id).await.unwrap();
    assert!(details.reservations[0].book.is_none());
}

#[tokio::test]
async fn deleting_author_keeps_books_in_global_collection() {
    let store = Repository::new();

    let author = store.authors.create(author_input("alvaro", 21)).await;
    let book = store
        .authors
        .add_book(author.id, book_input("chapeuzinho vermelho"))
        .await
        .unwrap();

    store.authors.delete(author.id).await.unwrap();

    assert!(store.authors.list().await.is_empty());
    assert_eq!(store.books.get_by_id(book.id).await.unwrap().id, book.id);
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let store = Repository::new();

    let first = store.books.create(book_input("primeiro")).await;
    let second = store.books.create(book_input("segundo")).await;
    let third = store.books.create(book_input("terceiro")).await;

    let ids: Vec<_> = store.books.list().await.into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

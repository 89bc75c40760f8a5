use rusty_library_catalog::{
    adapters::memory::{InMemoryBookRepository, InMemoryMemberRepository},
    application::{
        catalog::{self, CatalogDependencies},
        library::{self, LibraryDependencies},
        membership::{self, MembershipDependencies},
    },
    config::Config,
    domain::{
        Book, BookId, Member, MemberId,
        commands::{BorrowBook, PayFine, ReturnBook},
    },
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(?config, "starting library demo");

    // Initialize adapters
    let catalog_deps = CatalogDependencies::new(Arc::new(InMemoryBookRepository::new()));
    let membership_deps = MembershipDependencies::new(Arc::new(InMemoryMemberRepository::new()));

    let deps = LibraryDependencies {
        catalog: catalog_deps.clone(),
        membership: membership_deps.clone(),
        notification_service: config.notification_channel.build(),
        payment_processor: config.payment_method.build(),
        report_generator: config.report_kind.build(),
    };

    seed_catalog(&catalog_deps).await?;
    seed_members(&membership_deps).await?;

    // Borrow / return
    let member_id = MemberId::new("M001");
    let book_id = BookId::new("B001");

    library::borrow_book(
        &deps,
        BorrowBook {
            member_id: member_id.clone(),
            book_id: book_id.clone(),
        },
    )
    .await?;

    if let Err(e) = library::borrow_book(
        &deps,
        BorrowBook {
            member_id: member_id.clone(),
            book_id: book_id.clone(),
        },
    )
    .await
    {
        tracing::warn!(error = %e, "second borrow rejected");
    }

    library::return_book(
        &deps,
        ReturnBook {
            member_id: member_id.clone(),
            book_id,
        },
    )
    .await?;

    // Fines
    library::process_fine_payment(
        &deps,
        PayFine {
            member_id: member_id.clone(),
            amount: 5.5,
        },
    )
    .await?;
    library::process_fine_payment(
        &deps,
        PayFine {
            member_id,
            amount: 0.0,
        },
    )
    .await?;

    // Statistics and report
    let book_stats = catalog::get_book_statistics(&catalog_deps).await?;
    let member_stats = membership::get_member_statistics(&membership_deps).await?;
    let report = library::generate_library_report(&deps).await?;

    println!("{}", serde_json::to_string_pretty(&book_stats)?);
    println!("{}", serde_json::to_string_pretty(&member_stats)?);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

async fn seed_catalog(deps: &CatalogDependencies) -> Result<(), BoxError> {
    catalog::add_book(
        deps,
        Book::new("B001", "Clean Code", "Robert Martin", "978-0132350884"),
    )
    .await?;
    catalog::add_book(
        deps,
        Book::new("B002", "Design Patterns", "Gang of Four", "978-0201633610"),
    )
    .await?;
    catalog::add_book(
        deps,
        Book::new("B003", "SOLID Principles", "Uncle Bob", "978-0-13-235088-4"),
    )
    .await?;

    // Rule violations are logged and skipped
    let rejected = [
        Book::new("B001", "Duplicate Book", "Author", "978-0000000000"),
        Book::new("B004", "Invalid ISBN Book", "Author", "invalid-isbn"),
    ];
    for book in rejected {
        if let Err(e) = catalog::add_book(deps, book).await {
            tracing::warn!(error = %e, "book rejected");
        }
    }

    Ok(())
}

async fn seed_members(deps: &MembershipDependencies) -> Result<(), BoxError> {
    membership::register_member(
        deps,
        Member::new("M001", "John Doe", "john@example.com", Some("0123456789")),
    )
    .await?;
    membership::register_member(
        deps,
        Member::new("M002", "Jane Smith", "jane@example.com", None),
    )
    .await?;

    let rejected = [
        Member::new("M003", "Another John", "john@example.com", None),
        Member::new("M004", "No At Sign", "invalid.email", None),
        Member::new("M005", "Bad Phone", "bad@example.com", Some("12345")),
    ];
    for member in rejected {
        if let Err(e) = membership::register_member(deps, member).await {
            tracing::warn!(error = %e, "member rejected");
        }
    }

    Ok(())
}

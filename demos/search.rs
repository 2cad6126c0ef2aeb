use pexels::{client::Client, query::QueryArgs};

#[tokio::main]
async fn main() -> pexels::error::Result<()> {
    let mut args = std::env::args().skip(1);
    let key = args.next().unwrap_or_default();
    let query = args.next().unwrap_or_else(|| String::from("cats"));

    let mut client = Client::new(key)?;
    client.set_photos_per_page(10);

    println!("Ten photos of {}!", query);

    let result = client.search(&query, QueryArgs::new()).await?;

    match result.error {
        Some(e) => println!("- the API refused the search: {}", e),
        None => {
            for photo in result.photos {
                println!(
                    "- #{} by {}",
                    photo.id.map_or(String::from("?"), |id| id.to_string()),
                    photo.photographer.as_deref().unwrap_or("unknown")
                );
            }
        }
    }

    if let Some(limits) = client.limits() {
        println!(
            "{} of {} requests left",
            limits.remaining.map_or(String::from("?"), |n| n.to_string()),
            limits.limit.map_or(String::from("?"), |n| n.to_string()),
        );
    }

    Ok(())
}

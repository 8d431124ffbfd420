//! List one collection view

use anyhow::Result;

use crate::Site;

/// Print one named collection view
pub fn run(site: &Site, name: &str) -> Result<()> {
    let views = site.build_collections()?;

    let Some(docs) = views.get(name) else {
        let available: Vec<_> = views.names().collect();
        anyhow::bail!(
            "Unknown collection: {}. Available: {}",
            name,
            available.join(", ")
        );
    };

    println!("{} ({}):", name, docs.len());
    for doc in docs {
        match &doc.date {
            Some(date) => println!(
                "  {} - {} [{}]",
                date.format("%Y-%m-%d"),
                doc.title,
                doc.source
            ),
            None => println!("  {} [{}]", doc.title, doc.source),
        }
    }

    Ok(())
}

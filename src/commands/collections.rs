//! List all collection views

use anyhow::Result;

use crate::Site;

/// Print every collection view with its document count
pub fn run(site: &Site) -> Result<()> {
    let views = site.build_collections()?;

    for (name, docs) in views.iter() {
        println!("{} ({}):", name, docs.len());
        for doc in docs {
            println!("  {}", doc.source);
        }
    }

    Ok(())
}

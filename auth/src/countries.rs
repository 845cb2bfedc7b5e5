//! Country dial-code directory client.
//!
//! One GET against the restcountries API at login-form load. Entries without a
//! dial root are dropped, the rest map to `{name, flag, code, dial_code}`
//! sorted by name. A failed lookup is logged and yields an empty list; the
//! form stays usable, country selection is just unavailable.

use serde::{Deserialize, Serialize};
use tracing::error;

/// Fields filter keeps the payload to what the login form needs.
pub const DIRECTORY_URL: &str = "https://restcountries.com/v3.1/all?fields=name,idd,flag,cca2";

/// One selectable country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub flag: String,
    /// Two-letter country code, e.g. "GB".
    pub code: String,
    /// Dial code including the leading '+', e.g. "+44".
    pub dial_code: String,
}

#[derive(Debug, Default, Deserialize)]
struct CountryRecord {
    #[serde(default)]
    name: NameRecord,
    #[serde(default)]
    idd: IddRecord,
    #[serde(default)]
    flag: String,
    #[serde(default)]
    cca2: String,
}

#[derive(Debug, Default, Deserialize)]
struct NameRecord {
    #[serde(default)]
    common: String,
}

#[derive(Debug, Default, Deserialize)]
struct IddRecord {
    root: Option<String>,
    suffixes: Option<Vec<String>>,
}

/// Fetches the directory, degrading to an empty list on any failure.
pub async fn fetch_countries(client: &reqwest::Client) -> Vec<Country> {
    match try_fetch(client).await {
        Ok(countries) => countries,
        Err(e) => {
            error!(error = %e, "Country directory lookup failed");
            Vec::new()
        }
    }
}

async fn try_fetch(client: &reqwest::Client) -> Result<Vec<Country>, reqwest::Error> {
    let records: Vec<CountryRecord> = client
        .get(DIRECTORY_URL)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(shape(records))
}

fn shape(records: Vec<CountryRecord>) -> Vec<Country> {
    let mut countries: Vec<Country> = records
        .into_iter()
        .filter_map(|r| {
            let root = r.idd.root?;
            let suffixes = r.idd.suffixes?;
            let dial_code = format!("{}{}", root, suffixes.first().map(String::as_str).unwrap_or(""));
            Some(Country {
                name: r.name.common,
                flag: r.flag,
                code: r.cca2,
                dial_code,
            })
        })
        .collect();
    countries.sort_by(|a, b| a.name.cmp(&b.name));
    countries
}

//! Join resolution: attaching company and generic records to a primary row.
//!
//! Two directions exist. A brand row pulls in its company and generic; a
//! generic row (matched by a symptom search) pulls in one representative
//! brand and that brand's company. Either way a missing related record is a
//! valid state: the row degrades to `company_name = None` or an empty
//! `generic_details`. A store failure during a lookup is absorbed the same
//! way, so one bad row never aborts the rest of the page.
//!
//! The two lookups of a row are independent and run concurrently; a page of
//! rows fans out above this module.

use futures::join;
use tracing::warn;

use crate::models::{CompanyRecord, DenormalizedBrand, GenericRecord, MedicineRecord};
use crate::textnorm::normalize_generic;
use crate::traits::CatalogStore;

/// Resolves a brand row into its denormalized response shape.
pub async fn resolve_brand<S: CatalogStore>(
    store: &S,
    medicine: MedicineRecord,
) -> DenormalizedBrand {
    let (company, generic) = join!(
        lookup_company(store, medicine.company_id),
        lookup_generic(store, medicine.generic_id),
    );

    DenormalizedBrand {
        medicine: Some(medicine),
        company_name: company.map(|c| c.company_name),
        generic_details: generic.map(normalize_generic).into_iter().collect(),
    }
}

/// Resolves a symptom-matched generic into the brand-shaped response.
///
/// Picks the representative brand sharing the generic id, then that brand's
/// company. When no brand exists the result surfaces only the generic
/// fields.
pub async fn resolve_generic_match<S: CatalogStore>(
    store: &S,
    generic: GenericRecord,
) -> DenormalizedBrand {
    let medicine = match store.first_brand_for_generic(generic.generic_id).await {
        Ok(found) => found,
        Err(error) => {
            warn!(generic_id = generic.generic_id, %error, "brand lookup failed; serving generic fields only");
            None
        }
    };

    let company_name = match &medicine {
        Some(found) => lookup_company(store, found.company_id)
            .await
            .map(|c| c.company_name),
        None => None,
    };

    DenormalizedBrand {
        medicine,
        company_name,
        generic_details: vec![normalize_generic(generic)],
    }
}

async fn lookup_company<S: CatalogStore>(store: &S, company_id: i32) -> Option<CompanyRecord> {
    match store.company_by_id(company_id).await {
        Ok(found) => found,
        Err(error) => {
            warn!(company_id, %error, "company lookup failed; omitting from row");
            None
        }
    }
}

async fn lookup_generic<S: CatalogStore>(
    store: &S,
    generic_id: Option<i32>,
) -> Option<GenericRecord> {
    let generic_id = generic_id?;
    match store.generic_by_id(generic_id).await {
        Ok(found) => found,
        Err(error) => {
            warn!(generic_id, %error, "generic lookup failed; omitting from row");
            None
        }
    }
}

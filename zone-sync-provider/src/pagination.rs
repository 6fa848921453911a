//! Lazy draining of paginated listings.
//!
//! Pages are fetched one at a time, only when the consumer has taken every
//! item of the previous page. The streams are finite and cannot be restarted.

use std::future::Future;

use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};

use crate::error::{ProviderError, Result};
use crate::traits::DnsProvider;
use crate::types::{HostedZone, Page, RecordSetCursor, ResourceRecordSet};

enum Cursor<C> {
    Start,
    Next(C),
    Done,
}

/// Turn a page-fetching closure into a flat stream of items.
///
/// `fetch` receives `None` for the first page and the previous page's cursor afterwards.
pub fn paginate<'a, T, C, F, Fut>(fetch: F) -> BoxStream<'a, Result<T>>
where
    T: Send + 'a,
    C: Send + 'a,
    F: FnMut(Option<C>) -> Fut + Send + 'a,
    Fut: Future<Output = Result<Page<T, C>>> + Send + 'a,
{
    stream::try_unfold(
        (Cursor::Start, fetch),
        |(cursor, mut fetch)| async move {
            let position = match cursor {
                Cursor::Done => return Ok(None),
                Cursor::Start => None,
                Cursor::Next(c) => Some(c),
            };

            let page = fetch(position).await?;
            let next = page.next.map_or(Cursor::Done, Cursor::Next);
            let items = stream::iter(page.items.into_iter().map(Ok::<T, ProviderError>));

            Ok::<_, ProviderError>(Some((items, (next, fetch))))
        },
    )
    .try_flatten()
    .boxed()
}

/// Every hosted zone visible to the provider's credentials.
pub fn hosted_zones(provider: &dyn DnsProvider) -> BoxStream<'_, Result<HostedZone>> {
    paginate(move |marker: Option<String>| async move {
        provider.list_hosted_zones(marker.as_deref()).await
    })
}

/// Every record set of one hosted zone.
pub fn resource_record_sets<'a>(
    provider: &'a dyn DnsProvider,
    zone_id: &str,
) -> BoxStream<'a, Result<ResourceRecordSet>> {
    let zone_id = zone_id.to_string();
    paginate(move |start: Option<RecordSetCursor>| {
        let zone_id = zone_id.clone();
        async move {
            provider
                .list_resource_record_sets(&zone_id, start.as_ref())
                .await
        }
    })
}

//! Bounded pagination over a token-continuation listing endpoint

use crate::api::VideoPage;
use crate::error::Result;
use std::future::Future;
use tracing::debug;

/// Collect up to `target` item ids from a paged listing
///
/// `fetch` is called with the last-seen continuation token (`None` on the
/// first call) and the number of items still wanted from that page. The loop
/// stops when the target is met or the provider stops returning a token;
/// at most `ceil(target / page_size)` calls are ever issued, and no call is
/// made after a page without a continuation token. Any fetch error
/// terminates the run immediately.
pub async fn paginate<F, Fut>(target: usize, page_size: u32, mut fetch: F) -> Result<Vec<String>>
where
    F: FnMut(Option<String>, u32) -> Fut,
    Fut: Future<Output = Result<VideoPage>>,
{
    let mut ids: Vec<String> = Vec::new();

    if target == 0 || page_size == 0 {
        return Ok(ids);
    }

    let max_calls = target.div_ceil(page_size as usize);
    let mut token: Option<String> = None;

    for call in 0..max_calls {
        let wanted = (target - ids.len()).min(page_size as usize) as u32;
        let page = fetch(token.take(), wanted).await?;

        debug!(
            "page {} returned {} ids (continuation: {})",
            call + 1,
            page.ids.len(),
            page.next_token.is_some()
        );

        ids.extend(page.ids);

        if ids.len() >= target {
            break;
        }
        match page.next_token {
            Some(next) => token = Some(next),
            None => break,
        }
    }

    ids.truncate(target);
    Ok(ids)
}

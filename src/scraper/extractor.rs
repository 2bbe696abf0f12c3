//! In-page extraction scripts.
//!
//! Each script runs in the page context and resolves every field
//! through an ordered list of selector candidates, returning the first
//! non-empty trimmed text. The site renders different markup across
//! cohorts and locales, so redundancy here is the resilience mechanism.
//! Records missing their required fields are dropped in-page.

use crate::domain::ResultType;

/// Videos in a channel's uploads grid.
pub const VIDEO_LIST: &str = r#"(() => {
  const videos = document.querySelectorAll('ytd-rich-item-renderer');
  return Array.from(videos).map(video => {
    const link = video.querySelector('a#video-title-link');
    const href = link ? link.href : '';
    const idMatch = href.match(/watch\?v=([^&]+)/);
    const videoId = idMatch ? idMatch[1] : '';

    const titleElement = video.querySelector('#video-title');
    const title = titleElement ? titleElement.textContent.trim() : '';

    const metadataLine = video.querySelector('#metadata-line');
    const spans = metadataLine ? metadataLine.querySelectorAll('span') : [];
    const views = spans.length > 0 ? spans[0].textContent : '';
    const uploadTime = spans.length > 0 ? spans[spans.length - 1].textContent : '';

    const durationElement = video.querySelector('ytd-thumbnail-overlay-time-status-renderer span');
    const duration = durationElement ? durationElement.textContent.trim() : '';

    const img = video.querySelector('img#img');
    const thumbnail = img ? img.src : '';

    return {
      id: videoId,
      title: title,
      views: views,
      uploadTime: uploadTime,
      duration: duration,
      thumbnail: thumbnail,
      url: 'https://youtube.com/watch?v=' + videoId
    };
  }).filter(video => video.id && video.title);
})()"#;

/// Channel header: name, subscriber count, video count.
pub const CHANNEL_INFO: &str = r#"(() => {
  const nameSelectors = [
    'ytd-channel-name yt-formatted-string',
    '#channel-name yt-formatted-string',
    '.ytd-channel-name',
    '#text.ytd-channel-name',
    'yt-formatted-string.ytd-channel-name'
  ];

  let name = '';
  for (const selector of nameSelectors) {
    const element = document.querySelector(selector);
    if (element && element.textContent) {
      name = element.textContent.trim();
      break;
    }
  }

  const subscribers = document.querySelector('#subscriber-count');
  const videoCount = document.querySelector('#videos-count');

  return {
    name: name,
    subscribers: subscribers ? subscribers.textContent.trim() : '',
    videoCount: videoCount ? videoCount.textContent.trim() : ''
  };
})()"#;

/// Videos in a channel's search results. The results list renders
/// either renderer depending on the surface.
pub const CHANNEL_SEARCH_RESULTS: &str = r#"(() => {
  let videos = document.querySelectorAll('ytd-video-renderer');
  if (videos.length === 0) {
    videos = document.querySelectorAll('ytd-rich-item-renderer');
  }

  return Array.from(videos).map(video => {
    const link = video.querySelector('a#video-title, a#video-title-link');
    const href = link ? link.href : '';
    const idMatch = href.match(/watch\?v=([^&]+)/);
    const videoId = idMatch ? idMatch[1] : '';

    const titleElement = video.querySelector('#video-title');
    const title = titleElement ? titleElement.textContent.trim() : '';

    const viewsElement = video.querySelector('#metadata-line span:first-child, .view-count');
    const views = viewsElement ? viewsElement.textContent : '';

    const timeElement = video.querySelector('#metadata-line span:last-child, .published-time');
    const uploadTime = timeElement ? timeElement.textContent : '';

    const durationElement = video.querySelector('ytd-thumbnail-overlay-time-status-renderer span, .video-time');
    const duration = durationElement ? durationElement.textContent.trim() : '';

    const img = video.querySelector('img#img');
    const thumbnail = img ? img.src : '';

    return {
      id: videoId,
      title: title,
      views: views,
      uploadTime: uploadTime,
      duration: duration,
      thumbnail: thumbnail,
      url: 'https://youtube.com/watch?v=' + videoId
    };
  }).filter(video => video.id && video.title);
})()"#;

/// Top-level comment threads.
pub const COMMENT_LIST: &str = r#"(() => {
  const threads = document.querySelectorAll('ytd-comment-thread-renderer');
  return Array.from(threads).map(thread => {
    const authorElement = thread.querySelector('#author-text');
    const author = authorElement ? authorElement.textContent.trim() : '';
    const authorUrl = authorElement ? authorElement.href : '';

    const textElement = thread.querySelector('#content-text');
    const text = textElement ? textElement.textContent.trim() : '';

    const timeElement = thread.querySelector('#published-time-text');
    const time = timeElement ? timeElement.textContent.trim() : '';

    const likesElement = thread.querySelector('#vote-count-middle');
    const likes = likesElement ? likesElement.textContent.trim() : '0';

    const replyElement = thread.querySelector('#more-replies');
    const replyText = replyElement ? replyElement.textContent : '';
    const replyMatch = replyText.match(/\d+/);
    const replyCount = replyMatch ? replyMatch[0] : '0';

    const avatarElement = thread.querySelector('#author-thumbnail img');
    const authorAvatar = avatarElement ? avatarElement.src : '';

    return {
      author: author,
      authorUrl: authorUrl,
      authorAvatar: authorAvatar,
      text: text,
      time: time,
      likes: likes,
      replyCount: replyCount
    };
  }).filter(comment => comment.text && comment.author);
})()"#;

/// The page's own total comment count, digits only.
pub const COMMENT_COUNT: &str = r#"(() => {
  const countElement = document.querySelector('ytd-comments-header-renderer h2 yt-formatted-string');
  if (countElement) {
    const match = countElement.textContent.match(/[\d,]+/);
    return match ? match[0].replace(/,/g, '') : '0';
  }
  return '0';
})()"#;

/// Transcript panel segments: start offset in seconds plus text. The
/// displayed timestamp is converted to seconds in-page; durations are
/// derived afterwards from consecutive starts.
pub const TRANSCRIPT_SEGMENTS: &str = r#"(() => {
  const segmentSelectors = [
    'ytd-transcript-segment-renderer',
    'ytd-transcript-body-renderer ytd-transcript-segment-renderer',
    'ytd-engagement-panel-section-list-renderer ytd-transcript-segment-renderer',
    '#segments-container ytd-transcript-segment-renderer',
    'ytd-transcript-segment-list-renderer ytd-transcript-segment-renderer'
  ];

  let segments = [];
  for (const selector of segmentSelectors) {
    segments = document.querySelectorAll(selector);
    if (segments.length > 0) break;
  }
  if (segments.length === 0) {
    segments = document.querySelectorAll('[class*="transcript"][class*="segment"]');
  }

  return Array.from(segments).map(segment => {
    let timestampText = '';
    const timestampSelectors = ['.segment-timestamp', '[class*="timestamp"]', 'div:first-child'];
    for (const selector of timestampSelectors) {
      const elem = segment.querySelector(selector);
      if (elem && elem.textContent && /\d+:\d+/.test(elem.textContent)) {
        timestampText = elem.textContent.trim();
        break;
      }
    }

    let text = '';
    const textSelectors = [
      '.segment-text',
      'yt-formatted-string.segment-text',
      '[class*="segment-text"]',
      'yt-formatted-string:last-child'
    ];
    for (const selector of textSelectors) {
      const elem = segment.querySelector(selector);
      if (elem && elem.textContent) {
        const content = elem.textContent.trim();
        if (content && !/^\d+:\d+$/.test(content)) {
          text = content;
          break;
        }
      }
    }
    if (!text) {
      text = (segment.textContent || '').replace(timestampText, '').trim();
    }

    let startSeconds = 0;
    if (timestampText.includes(':')) {
      startSeconds = timestampText.split(':').reverse()
        .reduce((acc, part, idx) => acc + (parseInt(part) || 0) * Math.pow(60, idx), 0);
    }

    return { start: startSeconds.toString(), text: text };
  }).filter(segment => segment.text && segment.text.length > 0);
})()"#;

/// Watch-page fields attached to a comments result.
pub const VIDEO_DETAILS: &str = r#"(() => {
  const titleSelectors = [
    'h1.ytd-video-primary-info-renderer yt-formatted-string',
    'h1.ytd-video-primary-info-renderer',
    '#title h1'
  ];
  let title = '';
  for (const selector of titleSelectors) {
    const element = document.querySelector(selector);
    if (element && element.textContent) {
      title = element.textContent.trim();
      break;
    }
  }

  const channelSelectors = ['#owner-name a', '.ytd-channel-name a', 'ytd-channel-name a'];
  let channelName = '';
  let channelUrl = '';
  for (const selector of channelSelectors) {
    const element = document.querySelector(selector);
    if (element && element.textContent) {
      channelName = element.textContent.trim();
      channelUrl = element.href || '';
      break;
    }
  }

  const viewSelectors = ['#info .view-count', '.view-count', '.ytd-video-primary-info-renderer .view-count'];
  let views = '';
  for (const selector of viewSelectors) {
    const element = document.querySelector(selector);
    if (element && element.textContent) {
      views = element.textContent.trim();
      break;
    }
  }

  const uploadDateSelectors = ['#info-strings yt-formatted-string', '#info .date', '.ytd-video-primary-info-renderer #info-strings'];
  let uploadDate = '';
  for (const selector of uploadDateSelectors) {
    const element = document.querySelector(selector);
    if (element && element.textContent) {
      uploadDate = element.textContent.trim();
      break;
    }
  }

  const likeSelectors = [
    '#top-level-buttons-computed button[aria-label*="like"] span',
    '#segmented-like-button span'
  ];
  let likeCount = '';
  for (const selector of likeSelectors) {
    const element = document.querySelector(selector);
    if (element && element.textContent) {
      const text = element.textContent.trim();
      if (text && !text.includes('LIKE')) {
        likeCount = text;
        break;
      }
    }
  }

  return {
    title: title,
    channel: { name: channelName, url: channelUrl },
    views: views,
    uploadDate: uploadDate,
    likeCount: likeCount
  };
})()"#;

/// Full watch-page metadata, including the (possibly expanded)
/// description.
pub const VIDEO_METADATA: &str = r#"(() => {
  const titleSelectors = [
    'h1.ytd-video-primary-info-renderer yt-formatted-string',
    'h1.ytd-video-primary-info-renderer',
    '#title h1',
    '.ytd-video-primary-info-renderer h1'
  ];
  let title = '';
  for (const selector of titleSelectors) {
    const element = document.querySelector(selector);
    if (element && element.textContent) {
      title = element.textContent.trim();
      break;
    }
  }

  const descriptionSelectors = [
    '.ytd-expandable-video-description-body-renderer',
    '#description-inline-expander yt-formatted-string',
    '#description yt-formatted-string',
    '.ytd-video-secondary-info-renderer #description'
  ];
  let description = '';
  for (const selector of descriptionSelectors) {
    const element = document.querySelector(selector);
    if (element && element.textContent) {
      description = element.textContent.trim();
      if (description.length > 0) break;
    }
  }

  const uploadDateSelectors = ['#info-strings yt-formatted-string', '#info .date', '.ytd-video-primary-info-renderer #info-strings'];
  let uploadDate = '';
  for (const selector of uploadDateSelectors) {
    const element = document.querySelector(selector);
    if (element && element.textContent) {
      uploadDate = element.textContent.trim();
      break;
    }
  }

  const viewCountSelectors = ['#info .view-count', '.ytd-video-primary-info-renderer .view-count', '#count .view-count'];
  let viewCount = '';
  for (const selector of viewCountSelectors) {
    const element = document.querySelector(selector);
    if (element && element.textContent) {
      viewCount = element.textContent.trim();
      break;
    }
  }

  const likeCountSelectors = [
    '#top-level-buttons-computed button[aria-label*="like"] span',
    '#segmented-like-button span',
    'button[aria-label*="like"] .yt-spec-button-shape-next__button-text-content'
  ];
  let likeCount = '';
  for (const selector of likeCountSelectors) {
    const element = document.querySelector(selector);
    if (element && element.textContent) {
      const text = element.textContent.trim();
      if (text && !text.includes('LIKE')) {
        likeCount = text;
        break;
      }
    }
  }

  const channelSelectors = ['#owner-name a', '.ytd-channel-name a', '#channel-name yt-formatted-string'];
  let channelName = '';
  let channelUrl = '';
  for (const selector of channelSelectors) {
    const element = document.querySelector(selector);
    if (element && element.textContent) {
      channelName = element.textContent.trim();
      channelUrl = element.href || '';
      break;
    }
  }

  const durationSelectors = [
    '.ytp-time-duration',
    'ytd-thumbnail-overlay-time-status-renderer span',
    '.ytd-thumbnail-overlay-time-status-renderer'
  ];
  let duration = '';
  for (const selector of durationSelectors) {
    const element = document.querySelector(selector);
    if (element && element.textContent) {
      duration = element.textContent.trim();
      break;
    }
  }

  return {
    title: title,
    description: description,
    uploadDate: uploadDate,
    viewCount: viewCount,
    likeCount: likeCount,
    channelName: channelName,
    channelUrl: channelUrl,
    duration: duration
  };
})()"#;

const GLOBAL_SEARCH_BODY: &str = r#"
  const results = [];
  const videoElements = document.querySelectorAll('#contents ytd-video-renderer');
  const channelElements = document.querySelectorAll('#contents ytd-channel-renderer');

  if (resultTypes.includes('all') || resultTypes.includes('videos')) {
    for (const element of videoElements) {
      if (results.length >= maxResults) break;

      const titleElement = element.querySelector('h3 a');
      const title = titleElement ? titleElement.textContent.trim() : '';
      const url = titleElement ? titleElement.href : '';
      const idMatch = url.match(/watch\?v=([^&]+)/);
      const videoId = idMatch ? idMatch[1] : '';

      const channelElement = element.querySelector('#text a[href*="/channel/"], #text a[href*="/@"]');
      const channel = channelElement ? channelElement.textContent.trim() : '';

      let views = '';
      let uploadTime = '';
      const metadataElement = element.querySelector('#metadata-line');
      if (metadataElement) {
        const spans = metadataElement.querySelectorAll('span');
        if (spans.length >= 2) {
          views = spans[0].textContent.trim();
          uploadTime = spans[1].textContent.trim();
        }
      }

      const durationElement = element.querySelector('ytd-thumbnail-overlay-time-status-renderer span');
      const duration = durationElement ? durationElement.textContent.trim() : '';

      const thumbnailElement = element.querySelector('img');
      const thumbnail = thumbnailElement ? thumbnailElement.src : '';

      if (title && url && videoId) {
        results.push({
          id: videoId,
          type: 'video',
          title: title,
          url: url,
          channel: channel,
          views: views,
          uploadTime: uploadTime,
          duration: duration,
          thumbnail: thumbnail
        });
      }
    }
  }

  if (resultTypes.includes('all') || resultTypes.includes('channels')) {
    for (const element of channelElements) {
      if (results.length >= maxResults) break;

      const titleElement = element.querySelector('#text a');
      const title = titleElement ? titleElement.textContent.trim() : '';
      const url = titleElement ? titleElement.href : '';

      const idMatch = url.match(/channel\/([^/]+)/) || url.match(/@([^/]+)/);
      const channelId = idMatch ? idMatch[1] : '';

      const subsElement = element.querySelector('#subscribers');
      const subscribers = subsElement ? subsElement.textContent.trim() : '';

      const videoCountElement = element.querySelector('#video-count');
      const videoCount = videoCountElement ? videoCountElement.textContent.trim() : '';

      const thumbnailElement = element.querySelector('img');
      const thumbnail = thumbnailElement ? thumbnailElement.src : '';

      if (title && url && channelId) {
        results.push({
          id: channelId,
          type: 'channel',
          title: title,
          url: url,
          subscribers: subscribers,
          videoCount: videoCount,
          thumbnail: thumbnail
        });
      }
    }
  }

  return results;
"#;

/// Global search results, capped in-page at `max_results` and filtered
/// to the requested kinds.
pub fn global_search_script(max_results: usize, result_types: &[ResultType]) -> String {
    let types = serde_json::to_string(result_types).unwrap_or_else(|_| "[\"all\"]".to_string());
    format!(
        "(() => {{ const maxResults = {max_results}; const resultTypes = {types}; {GLOBAL_SEARCH_BODY} }})()"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_list_script_selectors() {
        assert!(VIDEO_LIST.contains("ytd-rich-item-renderer"));
        assert!(VIDEO_LIST.contains("a#video-title-link"));
        assert!(VIDEO_LIST.contains("#metadata-line"));
        assert!(VIDEO_LIST.contains("filter(video => video.id && video.title)"));
    }

    #[test]
    fn test_channel_info_script_tries_name_candidates_in_order() {
        let first = CHANNEL_INFO
            .find("ytd-channel-name yt-formatted-string")
            .unwrap();
        let last = CHANNEL_INFO
            .find("yt-formatted-string.ytd-channel-name")
            .unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_comment_list_script_selectors() {
        assert!(COMMENT_LIST.contains("ytd-comment-thread-renderer"));
        assert!(COMMENT_LIST.contains("#author-text"));
        assert!(COMMENT_LIST.contains("#content-text"));
        assert!(COMMENT_LIST.contains("#vote-count-middle"));
        assert!(COMMENT_LIST.contains("filter(comment => comment.text && comment.author)"));
    }

    #[test]
    fn test_transcript_script_has_segment_fallbacks() {
        assert!(TRANSCRIPT_SEGMENTS.contains("ytd-transcript-segment-renderer"));
        assert!(TRANSCRIPT_SEGMENTS.contains("#segments-container ytd-transcript-segment-renderer"));
        assert!(TRANSCRIPT_SEGMENTS.contains(".segment-timestamp"));
        assert!(TRANSCRIPT_SEGMENTS.contains(".segment-text"));
    }

    #[test]
    fn test_global_search_script_embeds_arguments() {
        let script = global_search_script(7, &[ResultType::Videos]);
        assert!(script.contains("const maxResults = 7;"));
        assert!(script.contains("const resultTypes = [\"videos\"];"));
        assert!(script.contains("ytd-video-renderer"));
        assert!(script.contains("ytd-channel-renderer"));
    }

    #[test]
    fn test_global_search_script_all_types() {
        let script = global_search_script(10, &[ResultType::All]);
        assert!(script.contains("const resultTypes = [\"all\"];"));
    }
}

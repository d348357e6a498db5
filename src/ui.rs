use crate::quota::USAGE_KEY;
use crate::share::{COPY_ACK, HASHTAG, SHARE_INTENT_URL};

pub fn render_index(daily_limit: u32) -> String {
    INDEX_HTML
        .replace("{{LIMIT}}", &daily_limit.to_string())
        .replace("{{STORAGE_KEY}}", USAGE_KEY)
        .replace("{{HASHTAG}}", HASHTAG)
        .replace("{{SHARE_URL}}", SHARE_INTENT_URL)
        .replace("{{COPY_ACK}}", COPY_ACK)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <meta name="description" content="毎日新しいひとことを生成・シェアしよう" />
  <title>今日のひとこと</title>
  <link rel="preconnect" href="https://fonts.googleapis.com" />
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
  <link href="https://fonts.googleapis.com/css2?family=Noto+Serif+JP:wght@200;300;400&display=swap" rel="stylesheet" />
  <style>
    body {
      margin: 0;
      min-height: 100vh;
      display: flex;
      flex-direction: column;
      font-family: 'Noto Serif JP', serif;
      color: #2a2a2a;
      background: #fff;
    }

    .header {
      text-align: center;
      padding: 80px 40px 60px;
      border-bottom: 1px solid #e8e8e8;
    }

    .title {
      font-size: 2.5rem;
      font-weight: 300;
      margin: 0 0 20px;
      letter-spacing: 0.05em;
    }

    .subtitle {
      font-size: 1rem;
      color: #666;
      margin: 0;
      font-weight: 200;
    }

    .main {
      flex: 1;
      max-width: 600px;
      margin: 0 auto;
      padding: 60px 40px;
      width: 100%;
      box-sizing: border-box;
    }

    .usage-info {
      text-align: center;
      margin-bottom: 40px;
    }

    .usage-count {
      font-size: 0.9rem;
      color: #888;
      background: #f8f8f8;
      padding: 8px 16px;
      border-radius: 20px;
      display: inline-block;
    }

    .generate-btn {
      width: 100%;
      max-width: 300px;
      display: block;
      margin: 0 auto 40px;
      padding: 16px 32px;
      font-size: 1.1rem;
      font-family: inherit;
      font-weight: 300;
      background: #2a2a2a;
      color: white;
      border: none;
      border-radius: 4px;
      cursor: pointer;
      transition: all 0.3s ease;
      letter-spacing: 0.05em;
    }

    .generate-btn:hover:not(:disabled) {
      background: #1a1a1a;
      transform: translateY(-1px);
    }

    .generate-btn:disabled {
      background: #ccc;
      cursor: not-allowed;
    }

    .generate-btn.loading {
      opacity: 0.7;
    }

    .error {
      background: #ffe6e6;
      color: #d63031;
      padding: 20px;
      border-radius: 4px;
      text-align: center;
      margin-bottom: 30px;
      font-weight: 300;
    }

    .episode-box {
      border: 1px solid #e8e8e8;
      border-radius: 8px;
      padding: 50px;
      margin: 50px 0 30px;
      min-height: 300px;
      display: flex;
      align-items: center;
      justify-content: center;
      box-shadow: 0 2px 10px rgba(0, 0, 0, 0.05);
      aspect-ratio: 1;
    }

    .episode-text {
      font-size: 1.2rem;
      line-height: 2;
      text-align: center;
      margin: 0;
      font-weight: 300;
      letter-spacing: 0.02em;
    }

    .share-buttons {
      display: flex;
      gap: 15px;
      justify-content: center;
    }

    .share-btn {
      padding: 12px 24px;
      font-size: 0.95rem;
      font-family: inherit;
      font-weight: 300;
      background: transparent;
      color: #2a2a2a;
      border: 1px solid #ccc;
      border-radius: 4px;
      cursor: pointer;
    }

    .share-btn:hover {
      background: #f5f5f5;
      border-color: #999;
    }

    [hidden] {
      display: none !important;
    }

    @media (max-width: 768px) {
      .title {
        font-size: 2rem;
      }

      .main {
        padding: 40px 20px;
      }

      .episode-box {
        padding: 30px 25px;
        min-height: 250px;
      }
    }
  </style>
</head>
<body>
  <header class="header">
    <h1 class="title">今日のひとこと</h1>
    <p class="subtitle">なんかいいひとことを毎日お届けします</p>
  </header>

  <main class="main">
    <div class="usage-info">
      <span class="usage-count">今日の残り回数: <span id="remaining">{{LIMIT}}</span>/{{LIMIT}}</span>
    </div>

    <button id="generate" class="generate-btn" type="button">ひとことを生成する</button>

    <div id="error" class="error" hidden></div>

    <section id="episode" hidden>
      <div class="episode-box">
        <p id="episode-text" class="episode-text"></p>
      </div>
      <div class="share-buttons">
        <button id="share" class="share-btn" type="button">Xでシェア</button>
        <button id="copy" class="share-btn" type="button">コピー</button>
      </div>
    </section>
  </main>

  <script>
    const DAILY_LIMIT = {{LIMIT}};
    const STORAGE_KEY = '{{STORAGE_KEY}}';

    const remainingEl = document.getElementById('remaining');
    const generateBtn = document.getElementById('generate');
    const errorEl = document.getElementById('error');
    const episodeSection = document.getElementById('episode');
    const episodeText = document.getElementById('episode-text');

    let usageCount = 0;
    let episode = '';
    let isLoading = false;

    const today = () => new Date().toDateString();

    const saveUsage = (count) => {
      localStorage.setItem(STORAGE_KEY, JSON.stringify({ date: today(), count }));
    };

    const loadUsage = () => {
      let stored = null;
      try {
        stored = JSON.parse(localStorage.getItem(STORAGE_KEY));
      } catch (err) {
        stored = null;
      }
      if (stored && stored.date === today() && Number.isInteger(stored.count)) {
        return stored.count;
      }
      saveUsage(0);
      return 0;
    };

    const setError = (message) => {
      errorEl.textContent = message;
      errorEl.hidden = !message;
    };

    const render = () => {
      const exhausted = usageCount >= DAILY_LIMIT;
      remainingEl.textContent = Math.max(DAILY_LIMIT - usageCount, 0);
      generateBtn.disabled = isLoading || exhausted;
      generateBtn.classList.toggle('loading', isLoading);
      generateBtn.textContent = isLoading
        ? '生成中...'
        : exhausted
          ? '本日の上限に達しました'
          : 'ひとことを生成する';
      episodeText.textContent = episode;
      episodeSection.hidden = !episode;
    };

    const generateEpisode = async () => {
      if (isLoading) {
        return;
      }
      if (usageCount >= DAILY_LIMIT) {
        setError(`今日の生成回数上限（${DAILY_LIMIT}回）に達しました。明日また試してください。`);
        return;
      }

      isLoading = true;
      setError('');
      render();

      try {
        const res = await fetch('/api/generate-episode', {
          method: 'POST',
          headers: { 'content-type': 'application/json' }
        });
        if (!res.ok) {
          throw new Error('ひとことの生成に失敗しました');
        }
        const data = await res.json();
        if (typeof data.episode !== 'string' || !data.episode) {
          throw new Error('ひとことの生成に失敗しました');
        }
        episode = data.episode;
        usageCount += 1;
        saveUsage(usageCount);
      } catch (err) {
        setError('ひとことの生成に失敗しました');
      } finally {
        isLoading = false;
        render();
      }
    };

    const shareToTwitter = () => {
      if (!episode) {
        return;
      }
      const text = encodeURIComponent(`今日のひとこと：\n\n${episode}\n\n{{HASHTAG}}`);
      window.open(`{{SHARE_URL}}?text=${text}`, '_blank');
    };

    const copyToClipboard = async () => {
      if (!episode) {
        return;
      }
      await navigator.clipboard.writeText(episode);
      alert('{{COPY_ACK}}');
    };

    generateBtn.addEventListener('click', () => generateEpisode());
    document.getElementById('share').addEventListener('click', shareToTwitter);
    document.getElementById('copy').addEventListener('click', () => {
      copyToClipboard().catch((err) => setError(err.message));
    });

    usageCount = loadUsage();
    render();
  </script>
</body>
</html>
"#;

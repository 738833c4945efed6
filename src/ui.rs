use crate::page::{escape_html, DownloadButton, Page, DEFAULT_IMAGE};

pub fn render_page(page: &Page) -> String {
    let bursts = &page.bursts;
    let archive = &page.archive;

    INDEX_HTML
        .replace("{{CURRENT_DATE}}", &escape_html(&page.current_date.html))
        .replace("{{IMAGE_SRC}}", &escape_html(&page.image.src))
        .replace("{{DEFAULT_IMAGE}}", DEFAULT_IMAGE)
        .replace("{{LATEST_UPDATE}}", &bursts.latest_update.html)
        .replace("{{NEWEST_FILE}}", &bursts.newest_file.html)
        .replace("{{DOWNLOAD_HREF}}", &escape_html(&bursts.download.href))
        .replace("{{BURSTS}}", &bursts.bursts.html)
        .replace("{{PICKER_MAX}}", &escape_html(&archive.picker.max))
        .replace("{{PICKER_VALUE}}", &escape_html(&archive.picker.value))
        .replace("{{ZIP_HREF}}", &escape_html(&archive.zip.link.href))
        .replace("{{ZIP_DISPLAY}}", display(&archive.zip))
        .replace("{{TXT_HREF}}", &escape_html(&archive.txt.link.href))
        .replace("{{TXT_DISPLAY}}", display(&archive.txt))
}

fn display(button: &DownloadButton) -> &'static str {
    if button.visible { "block" } else { "none" }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="de">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>ROBUST - Solar Radio Bursts</title>
  <style>
    :root {
      --bg: #0f1a2b;
      --panel: #16243a;
      --ink: #e8eef7;
      --muted: #9fb0c8;
      --accent: #f2a541;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      padding: 24px;
    }

    .layout {
      display: grid;
      grid-template-columns: minmax(280px, 1fr) minmax(320px, 2fr);
      gap: 24px;
      max-width: 1200px;
      margin: 0 auto;
    }

    .panel {
      background: var(--panel);
      border-radius: 12px;
      padding: 20px;
    }

    h1 {
      margin: 0 0 4px;
      font-size: 1.8rem;
    }

    #currentDate,
    .meta {
      color: var(--muted);
    }

    a {
      color: var(--accent);
    }

    #bursts {
      line-height: 1.8;
    }

    #myImage {
      width: 100%;
      border-radius: 8px;
      background: #0b1320;
    }

    .download {
      margin-top: 12px;
    }

    @media (max-width: 760px) {
      .layout {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <header class="panel">
    <h1>ROBUST</h1>
    <div id="currentDate">{{CURRENT_DATE}}</div>
  </header>

  <main class="layout">
    <section class="panel">
      <div id="robust_latest_update" class="meta">{{LATEST_UPDATE}}</div>
      <div id="robust_newestfile" class="meta">{{NEWEST_FILE}}</div>
      <p><a id="robustdownload" href="{{DOWNLOAD_HREF}}">Burstliste herunterladen</a></p>
      <div id="bursts">{{BURSTS}}</div>

      <h2>Archiv</h2>
      <form method="get" action="/">
        <input type="date" id="datepicker_archive" name="date" max="{{PICKER_MAX}}" value="{{PICKER_VALUE}}" />
        <input type="hidden" id="viewer_offset" name="offset" value="" />
      </form>
      <div id="download_archive_button_zip" class="download" style="display: {{ZIP_DISPLAY}}">
        <a id="download_archive_zip" href="{{ZIP_HREF}}">Archiv (zip)</a>
      </div>
      <div id="download_archive_button_txt" class="download" style="display: {{TXT_DISPLAY}}">
        <a id="download_archive_txt" href="{{TXT_HREF}}">Burstliste (txt)</a>
      </div>
    </section>

    <section class="panel">
      <img id="myImage" src="{{IMAGE_SRC}}" alt="Spektrum" onmouseout="resetImageSource('myImage')" />
    </section>
  </main>

  <script>
    function changeImageSource(id, src) {
      document.getElementById(id).src = src;
    }

    function resetImageSource(id) {
      document.getElementById(id).src = '{{DEFAULT_IMAGE}}';
    }

    const picker = document.getElementById('datepicker_archive');

    const showDownload = (buttonId, linkId, href) => {
      document.getElementById(linkId).href = href;
      document.getElementById(buttonId).style.display = 'block';
    };

    const updateDownloadLinks = async () => {
      const res = await fetch(`/api/archive?date=${encodeURIComponent(picker.value)}`);
      if (!res.ok) {
        console.warn(await res.text());
        return;
      }
      const links = await res.json();
      showDownload('download_archive_button_zip', 'download_archive_zip', links.zip);
      showDownload('download_archive_button_txt', 'download_archive_txt', links.txt);
    };

    const viewerOffset = -new Date().getTimezoneOffset();
    document.getElementById('viewer_offset').value = viewerOffset;

    const loadViewerDate = async () => {
      const params = new URLSearchParams(window.location.search);
      if (params.has('offset')) {
        return;
      }
      const res = await fetch(`/api/date?offset=${viewerOffset}`);
      if (!res.ok) {
        throw new Error(await res.text());
      }
      const banner = await res.json();
      document.getElementById('currentDate').textContent = banner.today_long;
      picker.max = banner.yesterday;
      if (!params.has('date')) {
        picker.value = banner.today;
      }
    };

    loadViewerDate().catch((err) => console.error('Error loading viewer date:', err));

    picker.addEventListener('input', () => {
      updateDownloadLinks().catch((err) => console.error('Error updating archive links:', err));
    });
  </script>
</body>
</html>
"#;

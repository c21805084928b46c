// Server-rendered dashboard page with the drag-and-drop client
use crate::domain::hierarchy::{CategoryNode, PanelNode};
use crate::domain::link::Link;
use serde_json::json;
use std::fmt::Write;

const PLACEHOLDER_ICON: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 16 16'%3E%3Crect width='16' height='16' rx='2' fill='%232d333b'/%3E%3C/svg%3E";

/// Escape text for HTML element content and double-quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Host of a link without a leading `www.`, for the secondary label
fn display_domain(link_url: &str) -> String {
    url::Url::parse(link_url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string()))
        .unwrap_or_default()
}

/// The url when it is safe to follow from an anchor: http(s) only
fn safe_href(link_url: &str) -> Option<&str> {
    let parsed = url::Url::parse(link_url).ok()?;
    matches!(parsed.scheme(), "http" | "https").then_some(link_url)
}

/// State handed to the client script: panels and their categories, no links
fn client_state(panels: &[PanelNode]) -> String {
    let data: Vec<_> = panels
        .iter()
        .map(|p| {
            json!({
                "id": p.panel.id,
                "name": p.panel.name,
                "categories": p.categories.iter()
                    .map(|c| json!({ "id": c.category.id, "name": c.category.name }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();
    // no raw `<` may reach the script element
    serde_json::Value::Array(data).to_string().replace('<', "\\u003c")
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

pub fn render_dashboard(panels: &[PanelNode]) -> String {
    let total_categories: usize = panels.iter().map(|p| p.categories.len()).sum();
    let total_links: usize = panels.iter().map(PanelNode::link_count).sum();
    let timestamp = chrono::Local::now().format("%a, %b %-d");
    let active_name = panels
        .first()
        .map(|p| p.panel.name.to_uppercase())
        .unwrap_or_else(|| "NONE".to_string());

    let mut html = String::with_capacity(16 * 1024);
    html.push_str(PAGE_HEAD);

    let _ = write!(
        html,
        r#"<header class="topbar">
  <span class="brand">cmd/dashboard</span>
  <span class="ctx" id="activeContext">ctx:{}</span>
  <span class="stats">{} &middot; {} &middot; {} &middot; {}</span>
  <span class="actions">
    <button onclick="openModal('addPanelModal')">+ context</button>
    <button onclick="openModal('addCategoryModal')">+ module</button>
    <button onclick="openAddLinkModal()">+ link</button>
  </span>
</header>
<nav class="panel-tabs">
"#,
        escape_html(&active_name),
        timestamp,
        plural(panels.len(), "context", "contexts"),
        plural(total_categories, "module", "modules"),
        plural(total_links, "link", "links"),
    );

    for (i, node) in panels.iter().enumerate() {
        let _ = write!(
            html,
            r#"  <button class="panel-tab{active}" data-panel-id="{id}" onclick="switchPanel({id})">{name}<span class="panel-delete" onclick="event.stopPropagation(); deletePanel({id})" title="Delete context">&times;</span></button>
"#,
            active = if i == 0 { " active" } else { "" },
            id = node.panel.id,
            name = escape_html(&node.panel.name),
        );
    }
    html.push_str("</nav>\n");

    for (i, node) in panels.iter().enumerate() {
        render_panel(&mut html, node, i == 0);
    }

    html.push_str(PAGE_MODALS);
    let _ = write!(
        html,
        "<script>\nconst PANELS = {};\n{}</script>\n</body>\n</html>\n",
        client_state(panels),
        PAGE_SCRIPT
    );
    html
}

fn render_panel(html: &mut String, node: &PanelNode, active: bool) {
    let _ = write!(
        html,
        r#"<section class="panel-content{}" data-panel-id="{}">
<main class="grid" data-panel-id="{}">
"#,
        if active { " active" } else { "" },
        node.panel.id,
        node.panel.id,
    );
    for category in &node.categories {
        render_category(html, category);
    }
    html.push_str("</main>\n</section>\n");
}

fn render_category(html: &mut String, node: &CategoryNode) {
    let id = node.category.id;
    let _ = write!(
        html,
        r#"<div class="card" data-category-id="{id}">
  <div class="card-header">
    <span class="card-handle" title="Drag to reorder">&#8942;&#8942;</span>
    <span class="label"><span class="marker">//</span>{name}</span>
    <span class="meta">{meta}</span>
    <span class="delete-cat" onclick="deleteCategory({id})" title="Delete module">&times;</span>
  </div>
  <div class="link-list" data-category-id="{id}">
"#,
        name = escape_html(&node.category.name),
        meta = plural(node.links.len(), "link", "links"),
    );
    if node.links.is_empty() {
        html.push_str("    <div class=\"card-empty\">-- empty --</div>\n");
    }
    for link in &node.links {
        render_link(html, link);
    }
    html.push_str("  </div>\n</div>\n");
}

fn render_link(html: &mut String, link: &Link) {
    let edit_payload = json!({
        "id": link.id,
        "name": link.name,
        "url": link.url,
        "categoryId": link.category_id,
    });
    let name = escape_html(&link.name);
    let anchor = match safe_href(&link.url) {
        Some(href) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape_html(href),
            name
        ),
        None => format!(r#"<span class="link-unsafe" title="Not an http(s) link">{}</span>"#, name),
    };
    let _ = write!(
        html,
        r#"    <div class="link-item" data-link-id="{id}">
      <span class="link-handle" title="Drag to move">&#8942;</span>
      <img src="{icon}" alt="" width="16" height="16" loading="lazy">
      <span class="link-text">{anchor}<span class="link-domain">{domain}</span></span>
      <span class="link-actions"><button class="edit-btn" data-link="{payload}" onclick="openEditLinkModal(JSON.parse(this.dataset.link))">edit</button><button class="delete-btn" onclick="deleteLink({id})">del</button></span>
    </div>
"#,
        id = link.id,
        icon = escape_html(link.favicon.as_deref().unwrap_or(PLACEHOLDER_ICON)),
        domain = escape_html(&display_domain(&link.url)),
        payload = escape_html(&edit_payload.to_string()),
    );
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>cmd/dashboard</title>
<style>
  :root { --bg: #22272e; --panel: #2d333b; --border: #444c56; --text: #adbac7; --muted: #768390; --accent: #539bf5; --danger: #e5534b; }
  * { box-sizing: border-box; }
  body { margin: 0; background: var(--bg); color: var(--text); font: 13px/1.5 "JetBrains Mono", ui-monospace, monospace; }
  button { background: var(--panel); color: var(--text); border: 1px solid var(--border); border-radius: 4px; padding: 2px 8px; font: inherit; cursor: pointer; }
  .topbar { display: flex; gap: 16px; align-items: center; padding: 10px 16px; border-bottom: 1px solid var(--border); }
  .brand { font-weight: 700; }
  .ctx { color: var(--accent); }
  .stats { color: var(--muted); flex: 1; }
  .actions { display: flex; gap: 6px; }
  .panel-tabs { display: flex; gap: 4px; padding: 8px 16px; }
  .panel-tab.active { border-color: var(--accent); color: var(--accent); }
  .panel-delete { margin-left: 6px; color: var(--muted); }
  .panel-content { display: none; padding: 8px 16px; }
  .panel-content.active { display: block; }
  .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 12px; }
  .card { background: var(--panel); border: 1px solid var(--border); border-radius: 6px; padding: 8px; }
  .card.dragging, .link-item.dragging { opacity: 0.4; }
  .card.drag-insert-before { border-left: 3px solid var(--accent); }
  .card.drag-target { border-color: var(--accent); }
  .card-header { display: flex; gap: 6px; align-items: center; margin-bottom: 6px; }
  .card-handle, .link-handle { cursor: grab; color: var(--muted); }
  .label { flex: 1; font-weight: 600; }
  .marker { color: var(--accent); margin-right: 4px; }
  .meta { color: var(--muted); }
  .delete-cat { cursor: pointer; color: var(--muted); }
  .link-list { min-height: 24px; }
  .link-item { display: flex; gap: 6px; align-items: center; padding: 2px 0; }
  .link-text { flex: 1; overflow: hidden; white-space: nowrap; text-overflow: ellipsis; }
  .link-text a { color: var(--text); text-decoration: none; }
  .link-unsafe { color: var(--text); text-decoration: line-through; }
  .link-domain { color: var(--muted); margin-left: 6px; }
  .link-actions button { padding: 0 4px; margin-left: 2px; }
  .delete-btn { color: var(--danger); }
  .card-empty { color: var(--muted); text-align: center; }
  .drop-indicator { height: 2px; background: var(--accent); margin: 2px 0; }
  .drag-ghost { position: absolute; top: -1000px; padding: 2px 8px; background: var(--panel); border: 1px solid var(--accent); }
  .modal-overlay { display: none; position: fixed; inset: 0; background: rgba(0,0,0,0.5); align-items: center; justify-content: center; }
  .modal-overlay.active { display: flex; }
  .modal { background: var(--panel); border: 1px solid var(--border); border-radius: 6px; padding: 16px; min-width: 320px; }
  .modal label { display: block; margin-top: 8px; color: var(--muted); }
  .modal input, .modal select { width: 100%; background: var(--bg); color: var(--text); border: 1px solid var(--border); padding: 4px; font: inherit; }
  .modal footer { margin-top: 12px; display: flex; justify-content: flex-end; gap: 6px; }
</style>
</head>
<body>
"#;

const PAGE_MODALS: &str = r#"<div class="modal-overlay" id="addPanelModal"><form class="modal" onsubmit="handleAddPanel(event)">
  <h3>new context</h3><label>name<input id="panelName" required></label>
  <footer><button type="button" onclick="closeModal('addPanelModal')">cancel</button><button type="submit">create</button></footer>
</form></div>
<div class="modal-overlay" id="addCategoryModal"><form class="modal" onsubmit="handleAddCategory(event)">
  <h3>new module</h3><label>name<input id="catName" required></label>
  <footer><button type="button" onclick="closeModal('addCategoryModal')">cancel</button><button type="submit">create</button></footer>
</form></div>
<div class="modal-overlay" id="addLinkModal"><form class="modal" onsubmit="handleAddLink(event)">
  <h3>new link</h3>
  <label>name<input id="linkName" required></label>
  <label>url<input id="linkUrl" type="url" required></label>
  <label>module<select id="linkCategory"></select></label>
  <footer><button type="button" onclick="closeModal('addLinkModal')">cancel</button><button type="submit">create</button></footer>
</form></div>
<div class="modal-overlay" id="editLinkModal"><form class="modal" onsubmit="handleEditLink(event)">
  <h3>edit link</h3><input type="hidden" id="editLinkId">
  <label>name<input id="editLinkName" required></label>
  <label>url<input id="editLinkUrl" type="url" required></label>
  <label>module<select id="editLinkCategory"></select></label>
  <footer><button type="button" onclick="closeModal('editLinkModal')">cancel</button><button type="submit">save</button></footer>
</form></div>
"#;

const PAGE_SCRIPT: &str = r#"
let activePanel = Number(localStorage.getItem('dashboard_activePanel')) || (PANELS[0]?.id ?? null);
if (!PANELS.find(p => p.id === activePanel)) activePanel = PANELS[0]?.id ?? null;

function switchPanel(id) {
  activePanel = id;
  localStorage.setItem('dashboard_activePanel', id);
  document.querySelectorAll('.panel-tab').forEach(t => t.classList.toggle('active', Number(t.dataset.panelId) === id));
  document.querySelectorAll('.panel-content').forEach(p => p.classList.toggle('active', Number(p.dataset.panelId) === id));
  const panel = PANELS.find(p => p.id === id);
  if (panel) document.getElementById('activeContext').textContent = 'ctx:' + panel.name.toUpperCase();
}

function populateCategoryDropdown(selectId) {
  const panel = PANELS.find(p => p.id === activePanel);
  const select = document.getElementById(selectId);
  select.innerHTML = '';
  if (panel) panel.categories.forEach(c => {
    const opt = document.createElement('option');
    opt.value = c.id;
    opt.textContent = c.name;
    select.appendChild(opt);
  });
}

function openModal(id) {
  document.getElementById(id).classList.add('active');
  const input = document.getElementById(id).querySelector('input:not([type=hidden])');
  if (input) setTimeout(() => input.focus(), 50);
}
function closeModal(id) { document.getElementById(id).classList.remove('active'); }

document.querySelectorAll('.modal-overlay').forEach(o => {
  o.addEventListener('click', e => { if (e.target === o) o.classList.remove('active'); });
});
document.addEventListener('keydown', e => {
  if (e.key === 'Escape') document.querySelectorAll('.modal-overlay.active').forEach(m => m.classList.remove('active'));
});

function openAddLinkModal() {
  populateCategoryDropdown('linkCategory');
  if (document.getElementById('linkCategory').options.length === 0) { alert('Create a module first.'); return; }
  openModal('addLinkModal');
}
function openEditLinkModal(link) {
  populateCategoryDropdown('editLinkCategory');
  document.getElementById('editLinkId').value = link.id;
  document.getElementById('editLinkName').value = link.name;
  document.getElementById('editLinkUrl').value = link.url;
  document.getElementById('editLinkCategory').value = link.categoryId;
  openModal('editLinkModal');
}

async function api(url, method, body) {
  const opts = { method, headers: { 'Content-Type': 'application/json' } };
  if (body) opts.body = JSON.stringify(body);
  const res = await fetch(url, opts);
  if (!res.ok) {
    const err = await res.json().catch(() => ({}));
    throw new Error(err.error || ('API ' + res.status));
  }
  return res.json();
}

async function submit(action) {
  try { await action(); location.reload(); } catch (err) { alert(err.message); }
}

function handleAddLink(e) {
  e.preventDefault();
  submit(() => api('/api/links', 'POST', {
    name: document.getElementById('linkName').value,
    url: document.getElementById('linkUrl').value,
    categoryId: Number(document.getElementById('linkCategory').value),
  }));
}
function handleEditLink(e) {
  e.preventDefault();
  const id = document.getElementById('editLinkId').value;
  submit(() => api('/api/links/' + id, 'PUT', {
    name: document.getElementById('editLinkName').value,
    url: document.getElementById('editLinkUrl').value,
    categoryId: Number(document.getElementById('editLinkCategory').value),
  }));
}
function deleteLink(id) {
  if (!confirm('Delete this link?')) return;
  submit(() => api('/api/links/' + id, 'DELETE'));
}
function handleAddCategory(e) {
  e.preventDefault();
  submit(() => api('/api/categories', 'POST', { name: document.getElementById('catName').value, panelId: activePanel }));
}
function deleteCategory(id) {
  if (!confirm('Delete this module and all its links?')) return;
  submit(() => api('/api/categories/' + id, 'DELETE'));
}
function handleAddPanel(e) {
  e.preventDefault();
  submit(() => api('/api/panels', 'POST', { name: document.getElementById('panelName').value }));
}
function deletePanel(id) {
  if (PANELS.length <= 1) { alert('Cannot delete the last context.'); return; }
  if (!confirm('Delete this context and everything in it?')) return;
  localStorage.removeItem('dashboard_activePanel');
  submit(() => api('/api/panels/' + id, 'DELETE'));
}

// Drag and drop. Every drop resubmits the full 0..n-1 ordering of each
// affected sibling list.
let dragType = null;
let dragData = null;
const dropLine = document.createElement('div');
dropLine.className = 'drop-indicator';

function armHandle(handleSelector, itemSelector) {
  document.querySelectorAll(handleSelector).forEach(h => {
    const item = h.closest(itemSelector);
    h.addEventListener('mousedown', () => item.draggable = true);
    h.addEventListener('mouseup', () => item.draggable = false);
    h.addEventListener('mouseleave', () => { if (!dragData) item.draggable = false; });
  });
}

function startDrag(e, element, label) {
  element.classList.add('dragging');
  e.dataTransfer.effectAllowed = 'move';
  const ghost = document.createElement('div');
  ghost.className = 'drag-ghost';
  ghost.textContent = label;
  document.body.appendChild(ghost);
  e.dataTransfer.setDragImage(ghost, 10, 10);
  requestAnimationFrame(() => ghost.remove());
}

function initDragDrop() {
  armHandle('.card-handle', '.card');
  armHandle('.link-handle', '.link-item');

  document.querySelectorAll('.card').forEach(card => {
    card.addEventListener('dragstart', e => {
      if (e.target !== card) return;
      dragType = 'card';
      dragData = { id: Number(card.dataset.categoryId), element: card };
      startDrag(e, card, '// ' + (card.querySelector('.label')?.textContent?.trim() || ''));
    });
    card.addEventListener('dragend', onDragEnd);
  });

  document.querySelectorAll('.link-item').forEach(item => {
    item.addEventListener('dragstart', e => {
      e.stopPropagation();
      const list = item.closest('.link-list');
      dragType = 'link';
      dragData = { id: Number(item.dataset.linkId), element: item, sourceList: list, sourceCatId: Number(list.dataset.categoryId) };
      startDrag(e, item, item.querySelector('a')?.textContent?.trim() || '');
    });
    item.addEventListener('dragend', onDragEnd);
  });

  document.querySelectorAll('.grid').forEach(grid => {
    grid.addEventListener('dragover', e => {
      if (dragType !== 'card') return;
      e.preventDefault();
      e.dataTransfer.dropEffect = 'move';
      clearHighlights();
      const before = getInsertBefore(grid, e.clientX, e.clientY, '.card');
      if (before && before !== dragData.element) before.classList.add('drag-insert-before');
    });
    grid.addEventListener('drop', e => {
      if (dragType !== 'card') return;
      e.preventDefault();
      if (dragData.element.parentElement !== grid) return;
      const before = getInsertBefore(grid, e.clientX, e.clientY, '.card');
      if (before && before !== dragData.element) grid.insertBefore(dragData.element, before);
      else if (!before) grid.appendChild(dragData.element);
      saveCategoryOrder(grid);
    });
    grid.addEventListener('dragleave', e => {
      if (dragType === 'card' && !grid.contains(e.relatedTarget)) clearHighlights();
    });
  });

  document.querySelectorAll('.link-list').forEach(list => {
    list.addEventListener('dragover', e => {
      if (dragType !== 'link') return;
      e.preventDefault();
      e.dataTransfer.dropEffect = 'move';
      clearHighlights();
      if (list !== dragData.sourceList) list.closest('.card').classList.add('drag-target');
      removeIndicator();
      const before = getInsertBefore(list, e.clientX, e.clientY, '.link-item');
      if (before && before !== dragData.element) list.insertBefore(dropLine, before);
      else if (!before) list.appendChild(dropLine);
    });
    list.addEventListener('drop', e => {
      if (dragType !== 'link') return;
      e.preventDefault();
      removeIndicator();
      const newCatId = Number(list.dataset.categoryId);
      const before = getInsertBefore(list, e.clientX, e.clientY, '.link-item');
      list.querySelector('.card-empty')?.remove();
      if (before && before !== dragData.element) list.insertBefore(dragData.element, before);
      else list.appendChild(dragData.element);
      if (dragData.sourceList !== list && dragData.sourceList.querySelectorAll('.link-item').length === 0) {
        const empty = document.createElement('div');
        empty.className = 'card-empty';
        empty.textContent = '-- empty --';
        dragData.sourceList.appendChild(empty);
      }
      updateCardMeta(newCatId);
      if (dragData.sourceCatId !== newCatId) updateCardMeta(dragData.sourceCatId);
      saveLinkOrder(new Set([dragData.sourceCatId, newCatId]));
    });
    list.addEventListener('dragleave', e => {
      if (dragType === 'link' && !list.closest('.card').contains(e.relatedTarget)) {
        removeIndicator();
        clearHighlights();
      }
    });
  });
}

function onDragEnd() {
  if (dragData?.element) {
    dragData.element.classList.remove('dragging');
    dragData.element.draggable = false;
  }
  removeIndicator();
  clearHighlights();
  dragType = null;
  dragData = null;
}

function getInsertBefore(container, clientX, clientY, selector) {
  const els = [...container.querySelectorAll(selector + ':not(.dragging)')];
  for (const el of els) {
    const r = el.getBoundingClientRect();
    if (clientY < r.top + r.height / 2) return el;
    if (clientY < r.bottom && clientX < r.left + r.width / 2) return el;
  }
  return null;
}

function removeIndicator() { if (dropLine.parentNode) dropLine.remove(); }
function clearHighlights() {
  document.querySelectorAll('.drag-insert-before,.drag-target').forEach(el => el.classList.remove('drag-insert-before', 'drag-target'));
}

function updateCardMeta(categoryId) {
  const list = document.querySelector('.link-list[data-category-id="' + categoryId + '"]');
  const meta = list?.closest('.card')?.querySelector('.meta');
  if (!meta) return;
  const count = list.querySelectorAll('.link-item').length;
  meta.textContent = count + (count === 1 ? ' link' : ' links');
}

async function saveCategoryOrder(grid) {
  const items = [...grid.querySelectorAll('.card')].map((c, i) => ({ id: Number(c.dataset.categoryId), position: i }));
  try {
    await api('/api/categories/reorder', 'PUT', { items });
  } catch (err) {
    console.error('Save failed:', err);
    location.reload();
  }
}

async function saveLinkOrder(affectedCatIds) {
  const items = [];
  for (const catId of affectedCatIds) {
    const list = document.querySelector('.link-list[data-category-id="' + catId + '"]');
    if (!list) continue;
    [...list.querySelectorAll('.link-item')].forEach((item, i) => {
      items.push({ id: Number(item.dataset.linkId), categoryId: catId, position: i });
    });
  }
  try {
    await api('/api/links/reorder', 'PUT', { items });
  } catch (err) {
    console.error('Save failed:', err);
    location.reload();
  }
}

switchPanel(activePanel);
initDragDrop();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::panel::Panel;

    fn sample() -> Vec<PanelNode> {
        vec![PanelNode {
            panel: Panel {
                id: 1,
                name: "Work <main>".to_string(),
                position: 0,
                created_at: String::new(),
            },
            categories: vec![
                CategoryNode {
                    category: Category {
                        id: 10,
                        name: "Build".to_string(),
                        panel_id: 1,
                        position: 0,
                        created_at: String::new(),
                    },
                    links: vec![Link {
                        id: 100,
                        name: "Docs & guides".to_string(),
                        url: "https://www.docs.rs/".to_string(),
                        favicon: None,
                        category_id: 10,
                        position: 0,
                        created_at: String::new(),
                    }],
                },
                CategoryNode {
                    category: Category {
                        id: 11,
                        name: "</script>".to_string(),
                        panel_id: 1,
                        position: 1,
                        created_at: String::new(),
                    },
                    links: vec![],
                },
            ],
        }]
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_display_domain() {
        assert_eq!(display_domain("https://www.docs.rs/axum"), "docs.rs");
        assert_eq!(display_domain("nope"), "");
    }

    #[test]
    fn test_render_escapes_user_text() {
        let html = render_dashboard(&sample());

        assert!(html.contains("Work &lt;main&gt;"));
        assert!(html.contains("Docs &amp; guides"));
        assert!(!html.contains("Work <main>"));
        assert!(html.contains("1 context &middot; 2 modules &middot; 1 link"));
        assert!(html.contains(r#"data-category-id="11""#));
        assert!(html.contains("-- empty --"));
    }

    #[test]
    fn test_client_state_cannot_close_script() {
        let state = client_state(&sample());
        assert!(!state.contains('<'));
        assert!(state.contains(r#""name":"\u003c/script>""#));
        assert!(state.contains(r#""name":"Work \u003cmain>""#));
        assert!(state.contains(r#""id":10"#));
        assert!(!state.contains("links"));
    }

    #[test]
    fn test_safe_href() {
        assert_eq!(safe_href("https://docs.rs"), Some("https://docs.rs"));
        assert_eq!(safe_href("http://localhost:3000/"), Some("http://localhost:3000/"));
        assert_eq!(safe_href("javascript:alert(1)"), None);
        assert_eq!(safe_href("data:text/html,hi"), None);
        assert_eq!(safe_href("not a url"), None);
    }

    #[test]
    fn test_render_drops_href_for_script_urls() {
        let mut panels = sample();
        panels[0].categories[0].links[0].url = "javascript:alert(1)".to_string();
        let html = render_dashboard(&panels);

        assert!(!html.contains(r#"href="javascript:"#));
        assert!(html.contains(r#"title="Not an http(s) link">Docs &amp; guides</span>"#));
    }

    #[test]
    fn test_render_links_http_urls() {
        let html = render_dashboard(&sample());
        assert!(html.contains(r#"<a href="https://www.docs.rs/" target="_blank""#));
    }

    #[test]
    fn test_render_empty_dashboard() {
        let html = render_dashboard(&[]);
        assert!(html.contains("ctx:NONE"));
        assert!(html.contains("const PANELS = [];"));
    }
}

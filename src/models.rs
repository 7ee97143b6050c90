use crate::error::ListError;

/// 购物清单条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub id: u64,
    pub name: String,
    pub quantity: i32,
}

impl ShoppingItem {
    pub fn new(id: u64, name: String, quantity: i32) -> Self {
        Self { id, name, quantity }
    }
}

/// 解析数量文本（十进制整数，不裁剪空白）
pub fn parse_quantity(text: &str) -> Result<i32, ListError> {
    text.parse::<i32>().map_err(|_| ListError::InvalidQuantity {
        input: text.to_string(),
    })
}

/// 购物清单（按添加顺序保存条目）
#[derive(Debug, Clone)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    next_id: u64, // 单调递增，删除后不复用
}

impl ShoppingList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 所有条目数量之和
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.quantity)).sum()
    }

    /// 添加条目
    ///
    /// 名称或数量为空白时直接忽略并返回 `Ok(None)`，不报错。
    /// 数量无法解析时返回 `InvalidQuantity`，清单不变。
    pub fn add(&mut self, name: &str, quantity_text: &str) -> Result<Option<u64>, ListError> {
        if name.trim().is_empty() || quantity_text.trim().is_empty() {
            return Ok(None);
        }

        let quantity = parse_quantity(quantity_text)?;
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(ShoppingItem::new(id, name.to_string(), quantity));

        tracing::debug!(id, name, quantity, "item added");
        Ok(Some(id))
    }

    /// 编辑条目，原地替换名称和数量（保留 id 与位置）
    ///
    /// 先校验数量；找不到 id 时返回 `Ok(false)`。
    pub fn edit(&mut self, id: u64, name: &str, quantity_text: &str) -> Result<bool, ListError> {
        let quantity = parse_quantity(quantity_text)?;

        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.name = name.to_string();
                item.quantity = quantity;
                tracing::debug!(id, name, quantity, "item edited");
                Ok(true)
            }
            None => {
                tracing::warn!(id, "edit on missing item ignored");
                Ok(false)
            }
        }
    }

    /// 删除条目，返回被删除的条目
    pub fn delete(&mut self, id: u64) -> Option<ShoppingItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);
        tracing::debug!(id, name = %removed.name, "item deleted");
        Some(removed)
    }
}

impl Default for ShoppingList {
    fn default() -> Self {
        Self::new()
    }
}

use crate::core::events::types::Topic;

/// 显示紧急程度
///
/// 与原始状态字符串解耦的抽象 UI 层级，渲染层据此
/// 选择颜色等视觉处理。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum Severity {
    /// 正常
    Nominal,
    /// 提示
    Info,
    /// 注意
    Warn,
    /// 告警
    Alert,
    /// 中性（停止/未知）
    Neutral,
    /// 特殊（载波发射）
    Special,
}

/// 单个主题的显示投影
#[derive(Debug, Clone, PartialEq)]
pub struct StatusDisplay {
    /// 显示标签
    pub label: String,
    /// 紧急程度
    pub severity: Severity,
}

impl StatusDisplay {
    /// 创建显示投影
    pub fn new(
        label: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            label: label.into(),
            severity,
        }
    }

    /// 主题首个事件到达前的初始投影
    pub fn unknown(topic: Topic) -> Self {
        Self::new(
            format!("{}: Unknown", topic.prefix()),
            Severity::Neutral,
        )
    }
}

/// 全部主题的当前显示状态
///
/// 每个主题任何时刻恰好持有一条投影；首个事件到达前
/// 处于显式的 Unknown 初始态。系统错误在没有通告时
/// 不显示，因此单独用 `Option` 表达。
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// 发射子系统投影
    pub transmission: StatusDisplay,
    /// 接收子系统投影
    pub reception: StatusDisplay,
    /// UDP 监听投影
    pub udp_listener: StatusDisplay,
    /// 载波发射投影
    pub carrier: StatusDisplay,
    /// WAV 生成投影
    pub wav_generation: StatusDisplay,
    /// 整机状态投影
    pub system_status: StatusDisplay,
    /// 最近一次系统错误通告
    pub system_error: Option<StatusDisplay>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            transmission: StatusDisplay::unknown(
                Topic::Transmission,
            ),
            reception: StatusDisplay::unknown(
                Topic::Reception,
            ),
            udp_listener: StatusDisplay::unknown(
                Topic::UdpListener,
            ),
            carrier: StatusDisplay::unknown(
                Topic::Carrier,
            ),
            wav_generation: StatusDisplay::unknown(
                Topic::WavGeneration,
            ),
            system_status: StatusDisplay::unknown(
                Topic::SystemStatus,
            ),
            system_error: None,
        }
    }
}

impl DisplayState {
    /// 读取主题的当前投影
    pub fn get(&self, topic: Topic) -> &StatusDisplay {
        match topic {
            Topic::Transmission => &self.transmission,
            Topic::Reception => &self.reception,
            Topic::UdpListener => &self.udp_listener,
            Topic::Carrier => &self.carrier,
            Topic::WavGeneration => {
                &self.wav_generation
            }
            Topic::SystemStatus => &self.system_status,
        }
    }

    /// 主题投影的可变槽位
    pub fn slot_mut(
        &mut self,
        topic: Topic,
    ) -> &mut StatusDisplay {
        match topic {
            Topic::Transmission => {
                &mut self.transmission
            }
            Topic::Reception => &mut self.reception,
            Topic::UdpListener => {
                &mut self.udp_listener
            }
            Topic::Carrier => &mut self.carrier,
            Topic::WavGeneration => {
                &mut self.wav_generation
            }
            Topic::SystemStatus => {
                &mut self.system_status
            }
        }
    }
}

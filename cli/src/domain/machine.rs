//! Vagrant machine definitions and Vagrantfile text rendering.
//!
//! Pure string assembly: no I/O, no validation of the generated Ruby beyond
//! escaping double quotes inside inline shell scripts.

/// Box used when the caller does not name one.
pub const DEFAULT_BOX: &str = "precise32";

/// Guest path the shared script folder is mounted at.
pub const SCRIPT_MOUNT: &str = "/scripts";

/// Index of the first data interface. Index 0 is Vagrant's NAT interface.
pub const FIRST_INTERFACE_INDEX: usize = 1;

/// A network interface attached to a managed machine.
///
/// The core treats implementations as opaque: it only needs an address for
/// the generated `ip` commands and the raw Vagrantfile lines to splice in.
pub trait NetworkInterface: Send + Sync {
    /// Address assigned inside the guest, e.g. `"10.11.12.13/24"`.
    fn address(&self) -> &str;

    /// Vagrantfile lines configuring this interface as data interface
    /// `index` of machine `machine`.
    fn config_lines(&self, index: usize, machine: &str) -> String;
}

/// Strip characters Vagrant interprets as operators in machine names.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.replace('-', "")
}

/// Escape double quotes so a script survives inside a Ruby string literal.
#[must_use]
pub fn escape_script(script: &str) -> String {
    script.replace('"', "\\\"")
}

/// One virtual machine managed through Vagrant.
///
/// Not to be confused with a Vagrant *box*, which is the template image a
/// machine boots from.
pub struct ManagedMachine {
    name: String,
    box_name: String,
    before_install: Vec<String>,
    install: Vec<String>,
    after_install: Vec<String>,
    network_scripts: Vec<String>,
    script_folder: Option<String>,
    interfaces: Vec<Box<dyn NetworkInterface>>,
}

impl ManagedMachine {
    /// Start building a machine. `-` is stripped from `name`.
    #[must_use]
    pub fn builder(name: &str) -> ManagedMachineBuilder {
        ManagedMachineBuilder {
            machine: Self {
                name: sanitize_name(name),
                box_name: DEFAULT_BOX.to_string(),
                before_install: Vec::new(),
                install: Vec::new(),
                after_install: Vec::new(),
                network_scripts: Vec::new(),
                script_folder: None,
                interfaces: Vec::new(),
            },
        }
    }

    /// Sanitized machine name, used as the Vagrantfile define key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn box_name(&self) -> &str {
        &self.box_name
    }

    #[must_use]
    pub fn interfaces(&self) -> &[Box<dyn NetworkInterface>] {
        &self.interfaces
    }

    /// Attach another network interface. It gets the next free index.
    pub fn add_interface(&mut self, iface: Box<dyn NetworkInterface>) {
        self.interfaces.push(iface);
    }

    /// Render the `config.vm.define` block for this machine.
    #[must_use]
    pub fn render(&self) -> String {
        let name = &self.name;

        let mut network_lines = String::new();
        let mut network_config = Vec::with_capacity(self.interfaces.len() * 2);
        for (offset, iface) in self.interfaces.iter().enumerate() {
            let index = FIRST_INTERFACE_INDEX + offset;
            network_lines.push_str(&iface.config_lines(index, name));
            network_config.push(format!("ip a add {} dev eth{index}", iface.address()));
            network_config.push(format!("ip l set eth{index} up"));
        }

        let scripts = self
            .before_install
            .iter()
            .chain(&self.install)
            .chain(&network_config)
            .chain(&self.network_scripts)
            .chain(&self.after_install);

        let mut out = format!(
            "  config.vm.define :{name} do |{name}|\n    {name}.vm.box = \"{}\"\n",
            self.box_name
        );
        if let Some(folder) = &self.script_folder {
            out.push_str(&format!(
                "    {name}.vm.synced_folder \"{folder}\", \"{SCRIPT_MOUNT}\"\n"
            ));
        }
        for script in scripts {
            out.push_str(&format!(
                "    {name}.vm.provision :shell, :inline => \"{}\"\n",
                escape_script(script)
            ));
        }
        out.push_str(&network_lines);
        out.push_str("  end\n");
        out
    }
}

/// Builder for [`ManagedMachine`]. Script lists are ordered; callers with a
/// single script pass a one-element vector.
pub struct ManagedMachineBuilder {
    machine: ManagedMachine,
}

impl ManagedMachineBuilder {
    #[must_use]
    pub fn box_name(mut self, box_name: impl Into<String>) -> Self {
        self.machine.box_name = box_name.into();
        self
    }

    #[must_use]
    pub fn before_install(mut self, scripts: Vec<String>) -> Self {
        self.machine.before_install = scripts;
        self
    }

    #[must_use]
    pub fn install(mut self, scripts: Vec<String>) -> Self {
        self.machine.install = scripts;
        self
    }

    #[must_use]
    pub fn after_install(mut self, scripts: Vec<String>) -> Self {
        self.machine.after_install = scripts;
        self
    }

    #[must_use]
    pub fn network_scripts(mut self, scripts: Vec<String>) -> Self {
        self.machine.network_scripts = scripts;
        self
    }

    /// Host directory mounted at `/scripts` in the guest.
    #[must_use]
    pub fn script_folder(mut self, path: impl Into<String>) -> Self {
        self.machine.script_folder = Some(path.into());
        self
    }

    #[must_use]
    pub fn interface(mut self, iface: Box<dyn NetworkInterface>) -> Self {
        self.machine.interfaces.push(iface);
        self
    }

    #[must_use]
    pub fn build(self) -> ManagedMachine {
        self.machine
    }
}

/// Render a complete Vagrantfile containing every machine's define block.
#[must_use]
pub fn render_vagrantfile(machines: &[ManagedMachine]) -> String {
    let mut out = String::from("Vagrant.configure(\"2\") do |config|\n");
    for machine in machines {
        out.push_str(&machine.render());
    }
    out.push_str("end\n");
    out
}
